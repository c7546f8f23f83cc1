//! rusty-validate
//!
//! Field validation for plain Rust structs where every failure carries the
//! message its field declared for end users.
//!
//! ```
//! use rusty_validate::{FieldFailure, Validate};
//!
//! #[derive(Validate)]
//! struct User {
//!     #[required]
//!     #[custom_message = "First Name is required!"]
//!     first_name: String,
//!
//!     #[range(0, 130)]
//!     #[custom_message = "Age must be between 0 and 130!"]
//!     age: i32,
//! }
//!
//! let user = User { first_name: String::new(), age: 200 };
//! let err = user.validate().unwrap_err();
//! let errors = err.field_errors().unwrap();
//!
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.get(0).unwrap().custom_message(), "First Name is required!");
//! ```

// Generated code names this crate by its absolute path
extern crate self as rusty_validate;

pub mod config;
pub mod errors;
pub mod field_error;
pub mod resolver;
pub mod validator;

pub use config::ValidatorConfig;
pub use errors::{FieldErrors, ValidateError};
pub use field_error::{CustomFieldError, FieldFailure};
pub use resolver::resolve;
pub use validator::Validator;

pub use rusty_validate_core::{
    rules, Context, Engine, EngineError, FieldError, FieldMeta, FieldRef, Kind, Numeric, Record,
    Rules, Scope, ValidationErrors, CUSTOM_MESSAGE, LABEL,
};
pub use rusty_validate_derive::Validate;

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}

/// Validation with the default [`Validator`]
///
/// Implemented for every type deriving `Validate`.
pub trait Validate: Record + Rules + Sized {
    fn validate(&self) -> Result<(), ValidateError> {
        Validator::new().validate(self)
    }

    fn validate_with(&self, validator: &Validator) -> Result<(), ValidateError> {
        validator.validate(self)
    }
}

impl<T: Record + Rules> Validate for T {}
