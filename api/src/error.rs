use thiserror::Error;

/// Why a lead submission did not reach an accepting endpoint.
#[derive(Error, Debug)]
pub enum SubmitError {
    /// The endpoint answered, but not with a 2xx status.
    #[error("endpoint rejected lead with status {status}")]
    Rejected { status: u16 },

    /// The request could not be completed (DNS, connection, TLS, CORS...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The payload could not be encoded as JSON.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// No endpoint was configured for this build.
    #[error("no lead endpoint configured (set {var})", var = crate::ENDPOINT_ENV_VAR)]
    NotConfigured,
}

impl SubmitError {
    /// True when the request completed and the endpoint said no.
    pub fn is_rejection(&self) -> bool {
        matches!(self, SubmitError::Rejected { .. })
    }
}

/// Endpoint configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required setting: {var}")]
    Missing { var: String },

    #[error("invalid endpoint url '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    #[error("unsupported endpoint scheme '{scheme}' (expected http or https)")]
    UnsupportedScheme { scheme: String },
}
