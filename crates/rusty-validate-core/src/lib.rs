//! rusty-validate core
//!
//! The rule engine behind `#[derive(Validate)]`: per-field rule functions,
//! the evaluation [`Engine`], the cancellation/deadline [`Context`] and the
//! static field-metadata tables every derived record carries.
//!
//! Records are normally not written against this crate directly; the derive
//! macro generates the [`Record`] and [`Rules`] implementations and the
//! `rusty-validate` crate turns [`EngineError::Violations`] into
//! user-facing failures.

pub mod context;
pub mod engine;
pub mod error;
pub mod record;
pub mod rules;
pub mod scope;
pub mod value;

pub use context::Context;
pub use engine::Engine;
pub use error::{EngineError, FieldError, Kind, ValidationErrors};
pub use record::{FieldMeta, Record, Rules, CUSTOM_MESSAGE, LABEL};
pub use scope::{FieldRef, Scope};
pub use value::{HasValue, LenValue, Numeric, NumericValue, StrValue, UniqueValue};
