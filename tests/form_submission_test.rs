use httpmock::prelude::*;
use lead_relay::client::{FieldId, FormField};
use lead_relay::domain::ports::FormView;
use lead_relay::{FormController, FormSettings, HttpTransport, ServiceCategory, SubmitError};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio_test::{assert_err, assert_ok};

#[derive(Clone, Default)]
struct PageState {
    success_visible: Arc<Mutex<bool>>,
    alerts: Arc<Mutex<Vec<String>>>,
    submit_label: Arc<Mutex<String>>,
}

impl FormView for PageState {
    fn render_field(&self, _field: &FormField) {}

    fn scroll_to_field(&self, _id: FieldId) {}

    fn set_submit_control(&self, _disabled: bool, label: &str) {
        *self.submit_label.lock().unwrap() = label.to_string();
    }

    fn show_success(&self) {
        *self.success_visible.lock().unwrap() = true;
    }

    fn hide_success(&self) {
        *self.success_visible.lock().unwrap() = false;
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

fn fill_jane_doe(form: &mut FormController<HttpTransport, PageState>) {
    form.on_input(FieldId::FirstName, "Jane");
    form.on_input(FieldId::LastName, "Doe");
    form.on_input(FieldId::Email, "jane@example.com");
    form.on_input(FieldId::Phone, "555-123-4567");
    form.select_service(Some(ServiceCategory::DrainCleaning));
    form.set_checked(FieldId::HumanCheck, true);
}

#[tokio::test]
async fn test_valid_form_posts_lead_and_clears() {
    let server = MockServer::start_async().await;
    let relay_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/send-email")
                .header("Content-Type", "application/json")
                .json_body_partial(
                    r#"{
                        "firstName": "Jane",
                        "lastName": "Doe",
                        "email": "jane@example.com",
                        "phone": "(555) 123-4567",
                        "service": "Drain Cleaning",
                        "message": ""
                    }"#,
                )
                .body_contains("\"timestamp\"");
            then.status(200).json_body(json!({
                "success": true,
                "message": "Email sent successfully",
                "emailId": "email_123"
            }));
        })
        .await;

    let page = PageState::default();
    let mut form = FormController::new(
        HttpTransport::new(server.url("/api/send-email")),
        page.clone(),
        FormSettings::default(),
    );
    fill_jane_doe(&mut form);

    let ack = assert_ok!(form.handle_submit().await);
    relay_mock.assert_async().await;

    assert!(ack.success);
    assert_eq!(ack.email_id.as_deref(), Some("email_123"));
    assert!(*page.success_visible.lock().unwrap());
    assert_eq!(*page.submit_label.lock().unwrap(), "SEND");
    assert!(page.alerts.lock().unwrap().is_empty());
    assert!(form.field(FieldId::Email).value.is_empty());
    assert!(form.field(FieldId::Phone).value.is_empty());
}

#[tokio::test]
async fn test_invalid_form_makes_zero_requests() {
    let server = MockServer::start_async().await;
    let relay_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/send-email");
            then.status(200).json_body(json!({ "success": true }));
        })
        .await;

    let page = PageState::default();
    let mut form = FormController::new(
        HttpTransport::new(server.url("/api/send-email")),
        page.clone(),
        FormSettings::default(),
    );
    fill_jane_doe(&mut form);
    form.on_input(FieldId::Phone, "555-1234");

    let err = assert_err!(form.handle_submit().await);
    assert!(matches!(err, SubmitError::Validation { count: 1 }));
    relay_mock.assert_hits_async(0).await;
    assert_eq!(form.field(FieldId::Phone).value, "(555) 123-4");
    assert_eq!(
        form.field(FieldId::Phone).error_message().as_deref(),
        Some("Please enter a valid 10-digit phone number.")
    );
}

#[tokio::test]
async fn test_relay_failure_alerts_and_keeps_form() {
    let server = MockServer::start_async().await;
    let relay_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/send-email");
            then.status(500)
                .json_body(json!({ "error": "Email service not configured" }));
        })
        .await;

    let page = PageState::default();
    let settings = FormSettings {
        business_phone: "(973) 555-0100".to_string(),
        ..FormSettings::default()
    };
    let mut form = FormController::new(
        HttpTransport::new(server.url("/api/send-email")),
        page.clone(),
        settings,
    );
    fill_jane_doe(&mut form);

    let err = assert_err!(form.handle_submit().await);
    assert!(matches!(err, SubmitError::Rejected { status: 500 }));
    relay_mock.assert_async().await;

    assert_eq!(
        *page.alerts.lock().unwrap(),
        vec![
            "There was an error submitting your request. Please call us directly at (973) 555-0100."
                .to_string()
        ]
    );
    assert!(!*page.success_visible.lock().unwrap());
    assert_eq!(*page.submit_label.lock().unwrap(), "SEND");
    assert_eq!(form.field(FieldId::FirstName).value, "Jane");
}

#[tokio::test]
async fn test_unparseable_success_body_is_a_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/send-email");
            then.status(200).body("<html>ok</html>");
        })
        .await;

    let page = PageState::default();
    let mut form = FormController::new(
        HttpTransport::new(server.url("/api/send-email")),
        page.clone(),
        FormSettings::default(),
    );
    fill_jane_doe(&mut form);

    let err = assert_err!(form.handle_submit().await);
    assert!(matches!(err, SubmitError::InvalidResponse(_)));
    assert_eq!(page.alerts.lock().unwrap().len(), 1);
    assert_eq!(form.field(FieldId::LastName).value, "Doe");
}

#[tokio::test]
async fn test_any_json_success_body_counts_as_sent() {
    for (body, email_id) in [
        (json!("ok"), None),
        (json!(null), None),
        (json!({ "success": true, "emailId": 42 }), Some("42")),
    ] {
        let server = MockServer::start_async().await;
        let relay_mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/send-email");
                then.status(200).json_body(body.clone());
            })
            .await;

        let page = PageState::default();
        let mut form = FormController::new(
            HttpTransport::new(server.url("/api/send-email")),
            page.clone(),
            FormSettings::default(),
        );
        fill_jane_doe(&mut form);

        let ack = assert_ok!(form.handle_submit().await);
        relay_mock.assert_async().await;

        assert_eq!(ack.email_id.as_deref(), email_id, "{}", body);
        assert!(*page.success_visible.lock().unwrap(), "{}", body);
        assert!(page.alerts.lock().unwrap().is_empty(), "{}", body);
        assert!(form.field(FieldId::FirstName).value.is_empty(), "{}", body);
    }
}
