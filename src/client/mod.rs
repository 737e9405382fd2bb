pub mod controller;
pub mod field;
pub mod phone;
pub mod transport;

pub use controller::{FormController, FormSettings, SUCCESS_BANNER_DURATION};
pub use field::{validate_field, FieldId, FieldKind, FormField};
pub use phone::format_phone_number;
pub use transport::HttpTransport;
