use crate::domain::model::{LeadSubmission, RelayAck};
use crate::domain::ports::LeadTransport;
use crate::utils::error::SubmitError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Path the site's form posts to.
pub const DEFAULT_RELAY_PATH: &str = "/api/send-email";

/// Posts leads to the relay endpoint as JSON.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LeadTransport for HttpTransport {
    async fn post_lead(&self, lead: &LeadSubmission) -> Result<RelayAck, SubmitError> {
        tracing::debug!("Posting lead to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(lead).send().await?;

        let status = response.status();
        tracing::debug!("Relay response status: {}", status);
        if !status.is_success() {
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;
        Ok(RelayAck::from_body(&value))
    }
}
