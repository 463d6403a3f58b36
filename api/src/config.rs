//! Where leads are sent.
//!
//! The endpoint is never embedded in the components. Launchers resolve a
//! [`LeadConfig`] once at startup and hand it to the UI through context:
//!
//! - desktop: runtime `EVSCOOT_LEAD_ENDPOINT`, else the value present at build time
//! - web (WASM): only the build-time value exists

use reqwest::Url;
use tracing::{info, warn};

use crate::error::ConfigError;

/// Environment variable naming the lead submission endpoint.
pub const ENDPOINT_ENV_VAR: &str = "EVSCOOT_LEAD_ENDPOINT";

/// A validated http(s) endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadEndpoint(Url);

impl LeadEndpoint {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Missing {
                var: ENDPOINT_ENV_VAR.to_string(),
            });
        }
        let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
            value: trimmed.to_string(),
            reason: e.to_string(),
        })?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            other => Err(ConfigError::UnsupportedScheme {
                scheme: other.to_string(),
            }),
        }
    }

    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl std::fmt::Display for LeadEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Submission settings injected into the UI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadConfig {
    /// `None` means every submission fails as a transport error.
    pub endpoint: Option<LeadEndpoint>,
}

impl LeadConfig {
    pub fn with_endpoint(endpoint: LeadEndpoint) -> Self {
        Self {
            endpoint: Some(endpoint),
        }
    }

    /// Build from an optional raw value. `None`/blank is an error so callers
    /// can decide whether a missing endpoint is fatal.
    pub fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        match value {
            Some(raw) => LeadEndpoint::parse(raw).map(Self::with_endpoint),
            None => Err(ConfigError::Missing {
                var: ENDPOINT_ENV_VAR.to_string(),
            }),
        }
    }

    /// Value captured by `option_env!` when this crate was compiled.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("EVSCOOT_LEAD_ENDPOINT"), "build environment")
    }

    /// Runtime environment first, then the build-time value.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        match std::env::var(ENDPOINT_ENV_VAR) {
            Ok(raw) => Self::resolve(Some(&raw), "process environment"),
            Err(_) => Self::from_build_env(),
        }
    }

    /// WASM has no process environment; only the build-time value applies.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_build_env()
    }

    fn resolve(value: Option<&str>, origin: &str) -> Self {
        match Self::from_value(value) {
            Ok(config) => {
                if let Some(endpoint) = &config.endpoint {
                    info!(%endpoint, origin, "lead endpoint configured");
                }
                config
            }
            Err(err) => {
                warn!(%err, origin, "lead submissions disabled");
                Self::default()
            }
        }
    }
}
