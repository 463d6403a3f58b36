//! Lead submission client shared by the Electric Scooter site launchers.
//!
//! The UI crate owns the modal state; this crate only knows how a [`Lead`] is
//! serialized, where it is sent ([`LeadConfig`]) and how the endpoint's answer
//! is classified ([`SubmitError`]).

mod client;
mod config;
mod error;
mod lead;

pub use client::{HttpLeadSink, LeadSink};
pub use config::{LeadConfig, LeadEndpoint, ENDPOINT_ENV_VAR};
pub use error::{ConfigError, SubmitError};
pub use lead::Lead;
