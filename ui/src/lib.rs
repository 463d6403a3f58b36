//! Shared UI crate for the Electric Scooter site: the interest-capture header,
//! its modal, the landing sections and localization.

pub mod core;
pub mod i18n;
pub mod theme;
pub mod views;

pub mod components {
    // Header with nav links and the lead-capture modal (components/site_header.rs)
    mod site_header;
    pub use site_header::{InterestCaptureHeader, SECTION_ANCHORS};

    mod interest_modal;
    pub use interest_modal::{dismiss, submit_lead, InterestModal};

    mod icons;
    pub use icons::{CloseIcon, MenuIcon};
}
