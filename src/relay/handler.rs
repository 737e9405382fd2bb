use crate::config::relay::RelayConfig;
use crate::domain::model::{LeadPayload, RelayRequest, RelayResponse};
use crate::domain::ports::EmailProvider;
use crate::relay::email::build_notification;
use crate::relay::resend::ResendProvider;
use crate::utils::error::{RelayError, Result};
use chrono::Utc;
use serde_json::json;

/// Relays one lead per request to the email provider.
///
/// Built without a provider when the credential is missing; such a handler
/// still answers 405/400 as usual but fails every well-formed lead with a
/// configuration error instead of calling out.
pub struct LeadRelayHandler<P: EmailProvider> {
    provider: Option<P>,
    config: RelayConfig,
}

impl LeadRelayHandler<ResendProvider> {
    pub fn from_config(config: RelayConfig) -> Self {
        let provider = match ResendProvider::from_config(&config) {
            Ok(provider) => Some(provider),
            Err(e) => {
                tracing::error!("{}", e);
                None
            }
        };
        Self { provider, config }
    }
}

impl<P: EmailProvider> LeadRelayHandler<P> {
    pub fn new(provider: Option<P>, config: RelayConfig) -> Self {
        Self { provider, config }
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_some()
    }

    /// Every outcome, including failures, comes back as a JSON response.
    pub async fn handle(&self, request: RelayRequest) -> RelayResponse {
        tracing::info!(method = %request.method, "Lead relay request received");

        match self.relay(request).await {
            Ok(email_id) => RelayResponse {
                status: 200,
                body: json!({
                    "success": true,
                    "message": "Email sent successfully",
                    "emailId": email_id,
                }),
            },
            Err(e) => {
                match &e {
                    RelayError::MethodNotAllowed { .. } | RelayError::MissingFieldsError { .. } => {
                        tracing::warn!("Rejected lead: {}", e)
                    }
                    RelayError::ProviderError { details, .. } => {
                        tracing::error!("Resend API error: {} {}", e, details)
                    }
                    _ => tracing::error!("Error sending email: {}", e),
                }
                RelayResponse {
                    status: e.status_code(),
                    body: e.response_body(),
                }
            }
        }
    }

    async fn relay(&self, request: RelayRequest) -> Result<Option<String>> {
        if !request.method.eq_ignore_ascii_case("POST") {
            return Err(RelayError::MethodNotAllowed {
                method: request.method,
            });
        }

        let payload: LeadPayload = match request.body.as_deref() {
            Some(body) if !body.trim().is_empty() => serde_json::from_str(body)?,
            _ => LeadPayload::default(),
        };
        let lead = payload
            .into_lead()
            .map_err(|fields| RelayError::MissingFieldsError { fields })?;

        let provider = self.provider.as_ref().ok_or_else(|| RelayError::ConfigError {
            message: "RESEND_API_KEY not configured".to_string(),
        })?;

        let email = build_notification(
            &lead,
            &self.config.from_email,
            &self.config.to_email,
            Utc::now(),
            self.config.display_timezone,
        );
        tracing::info!(service = %lead.service, "Forwarding lead to email provider");

        let sent = provider.send(&email).await?;
        tracing::info!(email_id = ?sent.id, "Lead notification sent");
        Ok(sent.id)
    }
}
