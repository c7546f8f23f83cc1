//! Static field metadata and the traits generated by `#[derive(Validate)]`

use std::collections::HashMap;

use crate::context::Context;
use crate::error::{EngineError, Kind};
use crate::scope::Scope;

/// Annotation key holding a field's custom failure message
pub const CUSTOM_MESSAGE: &str = "custom_message";

/// Annotation key holding a field's display label
pub const LABEL: &str = "label";

/// Declared shape of one record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Rust field name
    pub name: &'static str,
    pub kind: Kind,
    /// Rule expressions as written on the field, e.g. `range(0, 130)`
    pub rules: &'static [&'static str],
    /// String annotations, e.g. `("custom_message", "Age is invalid")`
    pub annotations: &'static [(&'static str, &'static str)],
}

impl FieldMeta {
    /// Value of the annotation named `key`, if the field declares it
    pub fn annotation(&self, key: &str) -> Option<&'static str> {
        self.annotations
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }

    pub fn custom_message(&self) -> Option<&'static str> {
        self.annotation(CUSTOM_MESSAGE)
    }

    pub fn label(&self) -> Option<&'static str> {
        self.annotation(LABEL)
    }

    /// Build a name index over a field table.
    ///
    /// Derived records build this once per type and keep it in a static.
    pub fn index(fields: &'static [FieldMeta]) -> HashMap<&'static str, &'static FieldMeta> {
        fields.iter().map(|field| (field.name, field)).collect()
    }
}

/// Introspectable record type
pub trait Record {
    /// Type name used as the root of every namespace
    const NAME: &'static str;

    /// Declared fields in declaration order
    fn fields() -> &'static [FieldMeta];

    /// Look a field up by its Rust name.
    ///
    /// Derived implementations use a cached index and fall through to
    /// `#[embed]`ded records, so promoted fields are found as well.
    fn field_meta(name: &str) -> Option<&'static FieldMeta> {
        Self::fields().iter().find(|field| field.name == name)
    }
}

/// Rule checks for a record.
///
/// Implementations report violations into `scope` in field declaration
/// order and return `Err` only for failures that are not violations.
pub trait Rules {
    fn check_rules(&self, ctx: &Context, scope: &mut Scope<'_>) -> Result<(), EngineError>;
}

impl<T: Rules + ?Sized> Rules for &T {
    fn check_rules(&self, ctx: &Context, scope: &mut Scope<'_>) -> Result<(), EngineError> {
        (**self).check_rules(ctx, scope)
    }
}

impl<T: Rules + ?Sized> Rules for Box<T> {
    fn check_rules(&self, ctx: &Context, scope: &mut Scope<'_>) -> Result<(), EngineError> {
        (**self).check_rules(ctx, scope)
    }
}
