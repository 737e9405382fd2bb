use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Service categories offered in the contact form's select box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    DrainCleaning,
    WaterHeater,
    LeakRepair,
    PipeRepair,
    SewerLine,
    FixtureInstallation,
    Emergency,
    Other,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 8] = [
        ServiceCategory::DrainCleaning,
        ServiceCategory::WaterHeater,
        ServiceCategory::LeakRepair,
        ServiceCategory::PipeRepair,
        ServiceCategory::SewerLine,
        ServiceCategory::FixtureInstallation,
        ServiceCategory::Emergency,
        ServiceCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceCategory::DrainCleaning => "Drain Cleaning",
            ServiceCategory::WaterHeater => "Water Heater",
            ServiceCategory::LeakRepair => "Leak Detection & Repair",
            ServiceCategory::PipeRepair => "Pipe Repair",
            ServiceCategory::SewerLine => "Sewer Line Service",
            ServiceCategory::FixtureInstallation => "Fixture Installation",
            ServiceCategory::Emergency => "Emergency Service",
            ServiceCategory::Other => "Other",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ServiceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ServiceCategory::ALL
            .into_iter()
            .find(|category| category.label() == s)
            .ok_or_else(|| format!("unknown service category: {}", s))
    }
}

/// A lead as the form sends it. Built at submit time and sent once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    #[serde(default)]
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// The relay's view of a request body: nothing is trusted to be present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A payload that passed the relay's presence check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: Option<String>,
}

impl LeadPayload {
    /// Presence-only check: shape of email and phone is left to the form.
    pub fn into_lead(self) -> Result<Lead, Vec<&'static str>> {
        fn present(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        let first_name = present(self.first_name);
        let last_name = present(self.last_name);
        let email = present(self.email);
        let phone = present(self.phone);
        let service = present(self.service);

        match (first_name, last_name, email, phone, service) {
            (Some(first_name), Some(last_name), Some(email), Some(phone), Some(service)) => {
                Ok(Lead {
                    first_name,
                    last_name,
                    email,
                    phone,
                    service,
                    message: present(self.message),
                })
            }
            (first_name, last_name, email, phone, service) => {
                let missing = [
                    ("firstName", first_name.is_none()),
                    ("lastName", last_name.is_none()),
                    ("email", email.is_none()),
                    ("phone", phone.is_none()),
                    ("service", service.is_none()),
                ];
                Err(missing
                    .into_iter()
                    .filter_map(|(name, absent)| absent.then_some(name))
                    .collect())
            }
        }
    }
}

/// Platform-neutral HTTP request handed to the relay.
#[derive(Debug, Clone)]
pub struct RelayRequest {
    pub method: String,
    pub body: Option<String>,
}

impl RelayRequest {
    pub fn new(method: impl Into<String>, body: Option<String>) -> Self {
        Self {
            method: method.into(),
            body,
        }
    }

    pub fn post_json(body: &Value) -> Self {
        Self::new("POST", Some(body.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelayResponse {
    pub status: u16,
    pub body: Value,
}

/// Send request body for the email provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// What the provider returns on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SentEmail {
    #[serde(default)]
    pub id: Option<String>,
}

/// Relay success body as the form reads it. Any JSON counts; fields are
/// picked out when they happen to be there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayAck {
    pub success: bool,
    pub message: Option<String>,
    pub email_id: Option<String>,
}

impl RelayAck {
    pub fn from_body(body: &Value) -> Self {
        let text = |key: &str| match body.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        };

        Self {
            success: body
                .get("success")
                .and_then(Value::as_bool)
                .unwrap_or(true),
            message: text("message"),
            email_id: text("emailId"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_service_category_round_trips_through_label() {
        for category in ServiceCategory::ALL {
            assert_eq!(category.label().parse::<ServiceCategory>(), Ok(category));
        }
        assert!("Roofing".parse::<ServiceCategory>().is_err());
        assert!("".parse::<ServiceCategory>().is_err());
    }

    #[test]
    fn test_lead_submission_uses_camel_case_keys() {
        let lead = LeadSubmission {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            service: "Drain Cleaning".to_string(),
            message: String::new(),
            timestamp: "2026-10-18T14:05:09Z".parse().unwrap(),
        };

        let value = serde_json::to_value(&lead).unwrap();
        assert_eq!(value["firstName"], "Jane");
        assert_eq!(value["lastName"], "Doe");
        assert_eq!(value["message"], "");
        assert_eq!(value["timestamp"], "2026-10-18T14:05:09Z");
    }

    #[test]
    fn test_payload_presence_check() {
        let payload: LeadPayload = serde_json::from_value(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "not-an-email",
            "phone": "1",
            "service": "Drain Cleaning",
            "message": ""
        }))
        .unwrap();

        let lead = payload.into_lead().unwrap();
        assert_eq!(lead.email, "not-an-email");
        assert_eq!(lead.message, None);
    }

    #[test]
    fn test_payload_reports_missing_fields_in_order() {
        let payload: LeadPayload = serde_json::from_value(json!({
            "firstName": "",
            "email": "jane@example.com",
            "phone": "5551234567"
        }))
        .unwrap();

        assert_eq!(
            payload.into_lead().unwrap_err(),
            vec!["firstName", "lastName", "service"]
        );
    }

    #[test]
    fn test_relay_ack_tolerates_missing_fields() {
        let ack = RelayAck::from_body(&json!({ "success": true }));
        assert!(ack.success);
        assert_eq!(ack.email_id, None);
    }

    #[test]
    fn test_relay_ack_reads_any_json() {
        assert!(RelayAck::from_body(&json!("ok")).success);
        assert_eq!(RelayAck::from_body(&Value::Null), RelayAck {
            success: true,
            ..RelayAck::default()
        });

        let ack = RelayAck::from_body(&json!({ "success": true, "emailId": 42 }));
        assert_eq!(ack.email_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_payload_ignores_timestamp_shape() {
        let payload: LeadPayload = serde_json::from_value(json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane@example.com",
            "phone": "(555) 123-4567",
            "service": "Drain Cleaning",
            "timestamp": 1760800000000u64
        }))
        .unwrap();

        assert!(payload.into_lead().is_ok());
    }
}
