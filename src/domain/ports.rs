use crate::client::field::{FieldId, FormField};
use crate::domain::model::{LeadSubmission, OutboundEmail, RelayAck, SentEmail};
use crate::utils::error::{Result, SubmitError};
use async_trait::async_trait;

/// Outbound side of the relay: one send request, no retries.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<SentEmail>;
}

/// How the form reaches the relay endpoint.
#[async_trait]
pub trait LeadTransport: Send + Sync {
    async fn post_lead(&self, lead: &LeadSubmission) -> std::result::Result<RelayAck, SubmitError>;
}

/// Everything the form controller does to the page.
pub trait FormView: Send + Sync {
    fn render_field(&self, field: &FormField);
    fn scroll_to_field(&self, id: FieldId);
    fn set_submit_control(&self, disabled: bool, label: &str);
    fn show_success(&self);
    fn hide_success(&self);
    fn alert(&self, message: &str);
}

/// Best-effort analytics sink. Errors are logged and dropped.
pub trait Tracker: Send + Sync {
    fn track(&self, event: &TrackingEvent) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingEvent {
    pub name: &'static str,
    pub category: Option<&'static str>,
    pub label: Option<&'static str>,
}

impl TrackingEvent {
    pub const FORM_SUBMISSION: TrackingEvent = TrackingEvent {
        name: "form_submission",
        category: Some("Contact"),
        label: Some("Service Request"),
    };

    pub const LEAD: TrackingEvent = TrackingEvent {
        name: "Lead",
        category: None,
        label: None,
    };
}
