use crate::client::phone::PHONE_DIGITS;
use crate::domain::model::ServiceCategory;
use crate::utils::error::FieldError;
use crate::utils::validation::{is_valid_email, phone_digits};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Phone,
    Service,
    Message,
    HumanCheck,
}

impl FieldId {
    /// Document order of the contact form.
    pub const ALL: [FieldId; 7] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Service,
        FieldId::Message,
        FieldId::HumanCheck,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Service => "service",
            FieldId::Message => "message",
            FieldId::HumanCheck => "humanCheck",
        }
    }

    fn kind(self) -> FieldKind {
        match self {
            FieldId::FirstName | FieldId::LastName => FieldKind::Text,
            FieldId::Email => FieldKind::Email,
            FieldId::Phone => FieldKind::Tel,
            FieldId::Service => FieldKind::Select,
            FieldId::Message => FieldKind::TextArea,
            FieldId::HumanCheck => FieldKind::Checkbox,
        }
    }

    fn required(self) -> bool {
        !matches!(self, FieldId::Message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
    Checkbox,
}

/// One input of the contact form plus its error state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub id: FieldId,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    pub checked: bool,
    pub error: Option<FieldError>,
}

impl FormField {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            kind: id.kind(),
            required: id.required(),
            value: String::new(),
            checked: false,
            error: None,
        }
    }

    pub fn is_marked_invalid(&self) -> bool {
        self.error.is_some()
    }

    /// Inline message shown under the field, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }

    /// Runs [`validate_field`] and records the outcome as the field's error state.
    pub fn revalidate(&mut self) -> Result<(), FieldError> {
        let outcome = validate_field(self);
        self.error = outcome.err();
        outcome
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.checked = false;
        self.error = None;
    }
}

/// Checks one field. An empty required field only ever reports
/// [`FieldError::Required`]; type checks run on non-empty values.
pub fn validate_field(field: &FormField) -> Result<(), FieldError> {
    if field.kind == FieldKind::Checkbox {
        return if field.required && !field.checked {
            Err(FieldError::NotVerified)
        } else {
            Ok(())
        };
    }

    let value = field.value.trim();
    if value.is_empty() {
        return if field.required {
            Err(FieldError::Required)
        } else {
            Ok(())
        };
    }

    match field.kind {
        FieldKind::Email if !is_valid_email(value) => Err(FieldError::InvalidEmail),
        FieldKind::Tel if phone_digits(value).len() != PHONE_DIGITS => {
            Err(FieldError::InvalidPhone)
        }
        FieldKind::Select if value.parse::<ServiceCategory>().is_err() => {
            Err(FieldError::NoSelection)
        }
        _ => Ok(()),
    }
}
