pub mod email;
pub mod gateway;
pub mod handler;
pub mod resend;

pub use handler::LeadRelayHandler;
pub use resend::ResendProvider;
