use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Method not allowed: {method}")]
    MethodNotAllowed { method: String },

    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingFieldsError { fields: Vec<&'static str> },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Email provider rejected the request with status {status}")]
    ProviderError { status: u16, details: Value },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl RelayError {
    /// HTTP status the relay answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::MethodNotAllowed { .. } => 405,
            RelayError::MissingFieldsError { .. } => 400,
            _ => 500,
        }
    }

    /// JSON body returned to the caller for this error.
    pub fn response_body(&self) -> Value {
        match self {
            RelayError::MethodNotAllowed { .. } => json!({ "error": "Method not allowed" }),
            RelayError::MissingFieldsError { .. } => json!({ "error": "Missing required fields" }),
            RelayError::ConfigError { .. } | RelayError::InvalidConfigValueError { .. } => {
                json!({ "error": "Email service not configured" })
            }
            RelayError::ProviderError { details, .. } => json!({
                "error": "Failed to send email",
                "details": details,
            }),
            RelayError::ApiError(_) | RelayError::SerializationError(_) => json!({
                "error": "Internal server error",
                "message": self.to_string(),
            }),
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;

/// Reasons a single form field fails client-side validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,

    #[error("Please select an option.")]
    NoSelection,

    #[error("Please verify that you are human.")]
    NotVerified,
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Form has {count} invalid field(s)")]
    Validation { count: usize },

    #[error("Relay responded with status {status}")]
    Rejected { status: u16 },

    #[error("Network request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Relay response was not valid JSON: {0}")]
    InvalidResponse(#[from] serde_json::Error),
}
