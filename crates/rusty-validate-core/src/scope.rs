//! Namespace bookkeeping while a record's rules run

use crate::context::Context;
use crate::error::{EngineError, FieldError, Kind};
use crate::record::Rules;

/// Static description of the field currently being checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef {
    pub name: &'static str,
    pub label: Option<&'static str>,
    pub kind: Kind,
}

impl FieldRef {
    pub const fn new(name: &'static str, label: Option<&'static str>, kind: Kind) -> Self {
        Self { name, label, kind }
    }
}

/// Collects violations for one level of a record.
///
/// The root scope is named after the record type; `dive` opens a child
/// scope whose namespace is extended by the field name (and index for
/// elements).
pub struct Scope<'a> {
    namespace: String,
    struct_namespace: String,
    use_labels: bool,
    errors: &'a mut Vec<FieldError>,
}

impl<'a> Scope<'a> {
    pub fn root(name: &str, use_labels: bool, errors: &'a mut Vec<FieldError>) -> Self {
        Self {
            namespace: name.to_string(),
            struct_namespace: name.to_string(),
            use_labels,
            errors,
        }
    }

    fn display_name(&self, field: &FieldRef) -> &'static str {
        match field.label {
            Some(label) if self.use_labels => label,
            _ => field.name,
        }
    }

    /// Record that `field` failed the rule `tag`
    pub fn report(&mut self, field: &FieldRef, tag: &str, param: &str) {
        let display = self.display_name(field);
        self.errors.push(FieldError::new(
            format!("{}.{}", self.namespace, display),
            format!("{}.{}", self.struct_namespace, field.name),
            display,
            field.name,
            tag,
            param,
            field.kind,
        ));
    }

    /// Error for a rule whose declaration the engine cannot evaluate
    pub fn invalid_rule(&self, field: &FieldRef, tag: &str, reason: impl Into<String>) -> EngineError {
        EngineError::InvalidRule {
            namespace: format!("{}.{}", self.namespace, self.display_name(field)),
            rule: tag.to_string(),
            reason: reason.into(),
        }
    }

    /// Run a nested record's rules under `field`
    pub fn dive<R: Rules + ?Sized>(
        &mut self,
        ctx: &Context,
        field: &FieldRef,
        value: &R,
    ) -> Result<(), EngineError> {
        let display = self.display_name(field);
        let mut child = Scope {
            namespace: format!("{}.{}", self.namespace, display),
            struct_namespace: format!("{}.{}", self.struct_namespace, field.name),
            use_labels: self.use_labels,
            errors: &mut *self.errors,
        };
        value.check_rules(ctx, &mut child)
    }

    /// Run the rules of one element of a collection field
    pub fn dive_index<R: Rules + ?Sized>(
        &mut self,
        ctx: &Context,
        field: &FieldRef,
        index: usize,
        value: &R,
    ) -> Result<(), EngineError> {
        ctx.check()?;
        let display = self.display_name(field);
        let mut child = Scope {
            namespace: format!("{}.{}[{}]", self.namespace, display, index),
            struct_namespace: format!("{}.{}[{}]", self.struct_namespace, field.name, index),
            use_labels: self.use_labels,
            errors: &mut *self.errors,
        };
        value.check_rules(ctx, &mut child)
    }
}
