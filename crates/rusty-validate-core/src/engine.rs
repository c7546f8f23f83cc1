//! Rule evaluation entry point

use crate::context::Context;
use crate::error::{EngineError, ValidationErrors};
use crate::record::{Record, Rules};
use crate::scope::Scope;

/// Evaluates a record's declared rules.
///
/// Every field is visited; within one field evaluation stops at the first
/// failing rule. Violations come back in visiting order as
/// [`EngineError::Violations`].
#[derive(Debug, Clone, Default)]
pub struct Engine {
    use_labels: bool,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a field's `label` annotation as its name in violations
    pub fn with_labels(mut self, use_labels: bool) -> Self {
        self.use_labels = use_labels;
        self
    }

    pub fn uses_labels(&self) -> bool {
        self.use_labels
    }

    pub fn evaluate<R: Record + Rules>(&self, ctx: &Context, record: &R) -> Result<(), EngineError> {
        ctx.check()?;

        let mut errors = Vec::new();
        let mut scope = Scope::root(R::NAME, self.use_labels, &mut errors);
        record.check_rules(ctx, &mut scope)?;

        if errors.is_empty() {
            return Ok(());
        }

        tracing::trace!(record = R::NAME, violations = errors.len(), "rules failed");
        Err(EngineError::Violations(ValidationErrors::new(errors)))
    }
}
