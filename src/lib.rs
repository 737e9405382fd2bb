pub mod client;
pub mod config;
pub mod domain;
pub mod relay;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use client::{FormController, FormSettings, HttpTransport};
pub use config::relay::RelayConfig;
pub use domain::model::{LeadSubmission, RelayRequest, RelayResponse, ServiceCategory};
pub use relay::{LeadRelayHandler, ResendProvider};
pub use utils::error::{FieldError, RelayError, Result, SubmitError};
