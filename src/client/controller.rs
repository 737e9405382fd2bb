use crate::client::field::{FieldId, FormField};
use crate::client::phone::format_phone_number;
use crate::domain::model::{LeadSubmission, RelayAck, ServiceCategory};
use crate::domain::ports::{FormView, LeadTransport, Tracker, TrackingEvent};
use crate::utils::error::{FieldError, SubmitError};
use chrono::Utc;
use std::time::Duration;

/// How long the success indicator stays up after a send.
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct FormSettings {
    pub submit_label: String,
    pub sending_label: String,
    /// Number the failure alert tells people to call instead.
    pub business_phone: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            submit_label: "SEND".to_string(),
            sending_label: "SENDING...".to_string(),
            business_phone: "(555) 123-4567".to_string(),
        }
    }
}

impl FormSettings {
    pub fn failure_alert(&self) -> String {
        format!(
            "There was an error submitting your request. Please call us directly at {}.",
            self.business_phone
        )
    }
}

/// Owns the contact form's state for the lifetime of the page.
pub struct FormController<T: LeadTransport, V: FormView> {
    fields: [FormField; FieldId::ALL.len()],
    transport: T,
    view: V,
    trackers: Vec<Box<dyn Tracker>>,
    settings: FormSettings,
}

/// Disabled submit control for the length of one request. Dropping it,
/// including when the submit future is cancelled, puts the control back.
struct SubmitControlGuard<V: FormView> {
    view: V,
    label: String,
    restored: bool,
}

impl<V: FormView> SubmitControlGuard<V> {
    fn engage(view: V, sending_label: &str, label: &str) -> Self {
        view.set_submit_control(true, sending_label);
        Self {
            view,
            label: label.to_string(),
            restored: false,
        }
    }

    fn restore(mut self) {
        self.restore_now();
    }

    fn restore_now(&mut self) {
        if !self.restored {
            self.restored = true;
            self.view.set_submit_control(false, &self.label);
        }
    }
}

impl<V: FormView> Drop for SubmitControlGuard<V> {
    fn drop(&mut self) {
        self.restore_now();
    }
}

impl<T, V> FormController<T, V>
where
    T: LeadTransport,
    V: FormView + Clone + 'static,
{
    pub fn new(transport: T, view: V, settings: FormSettings) -> Self {
        Self {
            fields: FieldId::ALL.map(FormField::new),
            transport,
            view,
            trackers: Vec::new(),
            settings,
        }
    }

    pub fn with_tracker(mut self, tracker: impl Tracker + 'static) -> Self {
        self.trackers.push(Box::new(tracker));
        self
    }

    pub fn field(&self, id: FieldId) -> &FormField {
        &self.fields[id as usize]
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        &mut self.fields[id as usize]
    }

    /// Input event: stores the new value, reformatting the phone field as it
    /// is typed, and re-validates only while the field is already invalid.
    pub fn on_input(&mut self, id: FieldId, raw: &str) {
        let value = if id == FieldId::Phone {
            format_phone_number(raw)
        } else {
            raw.to_string()
        };

        let field = self.field_mut(id);
        field.value = value;
        if field.is_marked_invalid() {
            let _ = field.revalidate();
        }
        self.view.render_field(self.field(id));
    }

    pub fn select_service(&mut self, service: Option<ServiceCategory>) {
        let label = service.map(ServiceCategory::label).unwrap_or_default();
        self.on_input(FieldId::Service, label);
    }

    pub fn set_checked(&mut self, id: FieldId, checked: bool) {
        let field = self.field_mut(id);
        field.checked = checked;
        if field.is_marked_invalid() {
            let _ = field.revalidate();
        }
        self.view.render_field(self.field(id));
    }

    pub fn on_blur(&mut self, id: FieldId) -> Result<(), FieldError> {
        let outcome = self.field_mut(id).revalidate();
        self.view.render_field(self.field(id));
        outcome
    }

    /// Validates every field and returns the invalid ones in document order.
    pub fn validate_all(&mut self) -> Vec<FieldId> {
        let mut invalid = Vec::new();
        for field in self.fields.iter_mut() {
            if field.revalidate().is_err() {
                invalid.push(field.id);
            }
            self.view.render_field(field);
        }
        invalid
    }

    /// One submission attempt. Nothing goes over the network unless every
    /// field validates; the form is only cleared after a successful send.
    /// `&mut self` keeps a second attempt out while one is in flight.
    pub async fn handle_submit(&mut self) -> Result<RelayAck, SubmitError> {
        let invalid = self.validate_all();
        if let Some(first) = invalid.first() {
            tracing::debug!("Form has {} invalid field(s), first: {}", invalid.len(), first.name());
            self.view.scroll_to_field(*first);
            return Err(SubmitError::Validation {
                count: invalid.len(),
            });
        }

        let control = SubmitControlGuard::engage(
            self.view.clone(),
            &self.settings.sending_label,
            &self.settings.submit_label,
        );

        let lead = self.build_submission();
        tracing::info!(service = %lead.service, "Submitting lead");
        let outcome = self.transport.post_lead(&lead).await;

        match outcome {
            Ok(ack) => {
                tracing::info!(email_id = ?ack.email_id, "Lead submitted");
                self.view.show_success();
                self.reset();
                control.restore();
                self.schedule_success_hide();
                self.fire_tracking();
                Ok(ack)
            }
            Err(e) => {
                tracing::error!("Error submitting form: {}", e);
                self.view.alert(&self.settings.failure_alert());
                control.restore();
                Err(e)
            }
        }
    }

    fn build_submission(&self) -> LeadSubmission {
        let text = |id: FieldId| self.field(id).value.trim().to_string();
        LeadSubmission {
            first_name: text(FieldId::FirstName),
            last_name: text(FieldId::LastName),
            email: text(FieldId::Email),
            phone: text(FieldId::Phone),
            service: self.field(FieldId::Service).value.clone(),
            message: text(FieldId::Message),
            timestamp: Utc::now(),
        }
    }

    fn reset(&mut self) {
        for field in self.fields.iter_mut() {
            field.reset();
            self.view.render_field(field);
        }
    }

    fn schedule_success_hide(&self) {
        let view = self.view.clone();
        tokio::spawn(async move {
            tokio::time::sleep(SUCCESS_BANNER_DURATION).await;
            view.hide_success();
        });
    }

    fn fire_tracking(&self) {
        for tracker in &self.trackers {
            for event in [TrackingEvent::FORM_SUBMISSION, TrackingEvent::LEAD] {
                if let Err(e) = tracker.track(&event) {
                    tracing::warn!("Tracking event {} dropped: {}", event.name, e);
                }
            }
        }
    }
}
