//! Aggregated validation failures

use std::collections::HashMap;
use std::fmt;

use rusty_validate_core::{EngineError, FieldError, Record};
use serde::Serialize;
use thiserror::Error;

use crate::field_error::{CustomFieldError, FieldFailure};

/// Every failure of one validation call, in the order the engine reported them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<CustomFieldError>);

impl FieldErrors {
    /// Translate each violation against `R`'s metadata.
    ///
    /// Returns `None` when there is nothing to report.
    pub fn aggregate<R, I>(violations: I, annotation: &str) -> Option<Self>
    where
        R: Record + ?Sized,
        I: IntoIterator<Item = FieldError>,
    {
        let failures: Vec<CustomFieldError> = violations
            .into_iter()
            .map(|error| CustomFieldError::translate::<R>(error, annotation))
            .collect();

        if failures.is_empty() {
            None
        } else {
            Some(Self(failures))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CustomFieldError> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CustomFieldError> {
        self.0.get(index)
    }

    /// First failure whose struct field is `name`
    pub fn for_field(&self, name: &str) -> Option<&CustomFieldError> {
        self.0.iter().find(|failure| failure.struct_field() == name)
    }

    /// Non-empty custom messages in failure order
    pub fn custom_messages(&self) -> Vec<&str> {
        self.0
            .iter()
            .map(FieldFailure::custom_message)
            .filter(|message| !message.is_empty())
            .collect()
    }

    /// Namespace -> display message (custom message, or the diagnostic)
    pub fn message_map(&self) -> HashMap<String, String> {
        self.0
            .iter()
            .map(|failure| (failure.namespace().to_string(), failure.message()))
            .collect()
    }

    pub fn into_vec(self) -> Vec<CustomFieldError> {
        self.0
    }
}

/// One diagnostic per line
impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut summary = String::new();
        for failure in &self.0 {
            summary.push_str(&failure.to_string());
            summary.push('\n');
        }
        f.write_str(summary.trim_end())
    }
}

impl std::error::Error for FieldErrors {}

impl IntoIterator for FieldErrors {
    type Item = CustomFieldError;
    type IntoIter = std::vec::IntoIter<CustomFieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a CustomFieldError;
    type IntoIter = std::slice::Iter<'a, CustomFieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Failure of [`Validator::validate`](crate::Validator::validate)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidateError {
    /// The record broke one or more rules
    #[error(transparent)]
    Invalid(FieldErrors),

    /// The engine could not finish, passed through unchanged
    #[error(transparent)]
    Engine(EngineError),
}

impl ValidateError {
    pub fn is_invalid(&self) -> bool {
        matches!(self, ValidateError::Invalid(_))
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            ValidateError::Invalid(errors) => Some(errors),
            ValidateError::Engine(_) => None,
        }
    }

    pub fn into_field_errors(self) -> Option<FieldErrors> {
        match self {
            ValidateError::Invalid(errors) => Some(errors),
            ValidateError::Engine(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rusty_validate_core::{FieldMeta, Kind, CUSTOM_MESSAGE};

    struct User;

    impl Record for User {
        const NAME: &'static str = "User";

        fn fields() -> &'static [FieldMeta] {
            const FIELDS: &[FieldMeta] = &[
                FieldMeta {
                    name: "first_name",
                    kind: Kind::String,
                    rules: &["required"],
                    annotations: &[(CUSTOM_MESSAGE, "First Name is required!")],
                },
                FieldMeta {
                    name: "nickname",
                    kind: Kind::String,
                    rules: &["max_length(8)"],
                    annotations: &[],
                },
            ];
            FIELDS
        }
    }

    fn violation(field: &str, tag: &str) -> FieldError {
        let namespace = format!("User.{}", field);
        FieldError::new(namespace.clone(), namespace, field, field, tag, "", Kind::String)
    }

    #[test]
    fn test_no_violations() {
        assert_eq!(FieldErrors::aggregate::<User, _>(Vec::new(), CUSTOM_MESSAGE), None);
    }

    #[test]
    fn test_aggregate_keeps_order_and_count() {
        let errors = FieldErrors::aggregate::<User, _>(
            vec![violation("nickname", "max_length"), violation("first_name", "required")],
            CUSTOM_MESSAGE,
        )
        .unwrap();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(0).unwrap().struct_field(), "nickname");
        assert_eq!(errors.get(1).unwrap().custom_message(), "First Name is required!");
        assert_eq!(errors.custom_messages(), vec!["First Name is required!"]);
        assert!(errors.for_field("email").is_none());
    }

    #[test]
    fn test_summary_text() {
        let errors = FieldErrors::aggregate::<User, _>(
            vec![violation("first_name", "required"), violation("nickname", "max_length")],
            CUSTOM_MESSAGE,
        )
        .unwrap();

        assert_eq!(
            errors.to_string(),
            "Key: 'User.first_name' Error:Field validation for 'first_name' failed on the 'required' tag\n\
             Key: 'User.nickname' Error:Field validation for 'nickname' failed on the 'max_length' tag"
        );
    }

    #[test]
    fn test_message_map_falls_back_to_diagnostic() {
        let errors = FieldErrors::aggregate::<User, _>(
            vec![violation("first_name", "required"), violation("nickname", "max_length")],
            CUSTOM_MESSAGE,
        )
        .unwrap();

        let messages = errors.message_map();
        assert_eq!(messages["User.first_name"], "First Name is required!");
        assert!(messages["User.nickname"].ends_with("failed on the 'max_length' tag"));
    }

    #[test]
    fn test_validate_error_passes_engine_errors_through() {
        let err = ValidateError::Engine(EngineError::Cancelled);
        assert_eq!(err.to_string(), EngineError::Cancelled.to_string());
        assert!(!err.is_invalid());
        assert!(err.field_errors().is_none());
    }
}
