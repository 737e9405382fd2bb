use crate::config::relay::RelayConfig;
use crate::domain::model::{OutboundEmail, SentEmail};
use crate::domain::ports::EmailProvider;
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Resend's send-email API, authenticated with a bearer key.
#[derive(Debug, Clone)]
pub struct ResendProvider {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl ResendProvider {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    pub fn from_config(config: &RelayConfig) -> Result<Self> {
        Ok(Self::new(&config.provider_endpoint, config.api_key()?))
    }
}

#[async_trait]
impl EmailProvider for ResendProvider {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail> {
        tracing::debug!("Sending notification to provider: {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Provider response status: {}", status);

        if !status.is_success() {
            let details = serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body));
            return Err(RelayError::ProviderError {
                status: status.as_u16(),
                details,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}
