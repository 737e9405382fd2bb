use crate::utils::error::{RelayError, Result};
use crate::utils::validation::{
    validate_email_address, validate_non_empty_string, validate_url, Validate,
};
use chrono_tz::Tz;
use std::env;
use std::fmt;

pub const DEFAULT_TO_EMAIL: &str = "your-email@example.com";
pub const DEFAULT_FROM_EMAIL: &str = "West Orange Plumbing <onboarding@resend.dev>";
pub const DEFAULT_PROVIDER_ENDPOINT: &str = "https://api.resend.com/emails";
pub const DEFAULT_DISPLAY_TIMEZONE: Tz = chrono_tz::America::New_York;

/// Out-of-band settings of the relay, read once at startup.
#[derive(Clone)]
pub struct RelayConfig {
    pub api_key: Option<String>,
    pub to_email: String,
    pub from_email: String,
    pub provider_endpoint: String,
    pub display_timezone: Tz,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let display_timezone = match get("DISPLAY_TIMEZONE") {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|e| RelayError::InvalidConfigValueError {
                    field: "DISPLAY_TIMEZONE".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_DISPLAY_TIMEZONE,
        };

        Ok(Self {
            api_key: get("RESEND_API_KEY"),
            to_email: get("TO_EMAIL").unwrap_or_else(|| DEFAULT_TO_EMAIL.to_string()),
            from_email: get("FROM_EMAIL").unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
            provider_endpoint: get("RESEND_API_URL")
                .unwrap_or_else(|| DEFAULT_PROVIDER_ENDPOINT.to_string()),
            display_timezone,
        })
    }

    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .ok_or_else(|| RelayError::ConfigError {
                message: "RESEND_API_KEY not configured".to_string(),
            })
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            to_email: DEFAULT_TO_EMAIL.to_string(),
            from_email: DEFAULT_FROM_EMAIL.to_string(),
            provider_endpoint: DEFAULT_PROVIDER_ENDPOINT.to_string(),
            display_timezone: DEFAULT_DISPLAY_TIMEZONE,
        }
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("to_email", &self.to_email)
            .field("from_email", &self.from_email)
            .field("provider_endpoint", &self.provider_endpoint)
            .field("display_timezone", &self.display_timezone)
            .finish()
    }
}

impl Validate for RelayConfig {
    fn validate(&self) -> Result<()> {
        validate_url("RESEND_API_URL", &self.provider_endpoint)?;
        validate_email_address("TO_EMAIL", &self.to_email)?;
        validate_non_empty_string("FROM_EMAIL", &self.from_email)?;

        tracing::debug!("✅ Relay configuration validation passed");
        Ok(())
    }
}
