use futures::future::{FutureExt, LocalBoxFuture};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use crate::config::{LeadConfig, LeadEndpoint};
use crate::error::SubmitError;
use crate::lead::Lead;

/// Anything that can accept a lead.
///
/// Futures are `!Send` so the same sink runs under the browser's single
/// threaded executor and the desktop renderer.
pub trait LeadSink {
    fn submit<'a>(&'a self, lead: &'a Lead) -> LocalBoxFuture<'a, Result<(), SubmitError>>;
}

/// Posts leads as JSON to the configured endpoint. One attempt, no retries.
#[derive(Debug, Clone, Default)]
pub struct HttpLeadSink {
    client: reqwest::Client,
    endpoint: Option<LeadEndpoint>,
}

impl HttpLeadSink {
    pub fn new(config: &LeadConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> Option<&LeadEndpoint> {
        self.endpoint.as_ref()
    }

    async fn post(&self, lead: &Lead) -> Result<(), SubmitError> {
        let endpoint = self.endpoint.as_ref().ok_or(SubmitError::NotConfigured)?;
        let body = serde_json::to_vec(lead)?;

        debug!(%endpoint, bytes = body.len(), "posting lead");
        let response = self
            .client
            .post(endpoint.url().clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        // Body is ignored; the status alone decides.
        let status = response.status();
        if status.is_success() {
            debug!(status = status.as_u16(), "lead accepted");
            Ok(())
        } else {
            warn!(status = status.as_u16(), "lead rejected by endpoint");
            Err(SubmitError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

impl LeadSink for HttpLeadSink {
    fn submit<'a>(&'a self, lead: &'a Lead) -> LocalBoxFuture<'a, Result<(), SubmitError>> {
        self.post(lead).boxed_local()
    }
}
