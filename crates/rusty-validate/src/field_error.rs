//! A rule violation paired with its custom message

use std::fmt;
use std::ops::Deref;

use rusty_validate_core::{FieldError, Kind, Record};
use serde::Serialize;

use crate::resolver::resolve;

/// Read access shared by rule violations and their augmented form
pub trait FieldFailure {
    fn field_error(&self) -> &FieldError;

    /// Message declared on the field, `""` when there is none
    fn custom_message(&self) -> &str {
        ""
    }

    fn namespace(&self) -> &str {
        self.field_error().namespace()
    }

    fn field(&self) -> &str {
        self.field_error().field()
    }

    fn struct_field(&self) -> &str {
        self.field_error().struct_field()
    }

    fn tag(&self) -> &str {
        self.field_error().tag()
    }

    fn param(&self) -> &str {
        self.field_error().param()
    }

    fn kind(&self) -> Kind {
        self.field_error().kind()
    }

    /// Custom message when one was declared, the diagnostic otherwise
    fn message(&self) -> String {
        match self.custom_message() {
            "" => self.field_error().to_string(),
            custom => custom.to_string(),
        }
    }
}

impl FieldFailure for FieldError {
    fn field_error(&self) -> &FieldError {
        self
    }
}

/// Rule violation carrying the custom message of the failing field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomFieldError {
    #[serde(flatten)]
    error: FieldError,
    custom_message: &'static str,
}

impl CustomFieldError {
    /// Attach the message found under `annotation` on `R`'s field
    pub fn translate<R: Record + ?Sized>(error: FieldError, annotation: &str) -> Self {
        let custom_message = resolve::<R>(annotation, error.struct_field());
        Self {
            error,
            custom_message,
        }
    }

    pub fn into_inner(self) -> FieldError {
        self.error
    }
}

impl FieldFailure for CustomFieldError {
    fn field_error(&self) -> &FieldError {
        &self.error
    }

    fn custom_message(&self) -> &str {
        self.custom_message
    }
}

impl Deref for CustomFieldError {
    type Target = FieldError;

    fn deref(&self) -> &FieldError {
        &self.error
    }
}

/// The engine diagnostic; the custom message is not part of it
impl fmt::Display for CustomFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.error.fmt(f)
    }
}
