//! Platform-agnostic logic shared by the components.

pub mod lead_form;
