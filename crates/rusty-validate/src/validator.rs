//! Validation entry point

use rusty_validate_core::{Context, Engine, EngineError, Record, Rules};
use tracing::{debug, warn};

use crate::config::ValidatorConfig;
use crate::errors::{FieldErrors, ValidateError};
use crate::field_error::FieldFailure;

/// Runs the rule engine and attaches custom messages to its violations.
///
/// Holds no per-call state; one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidatorConfig,
    engine: Engine,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        let engine = Engine::new().with_labels(config.engine.use_labels);
        Self { config, engine }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn validate<R: Record + Rules>(&self, record: &R) -> Result<(), ValidateError> {
        self.validate_ctx(&Context::background(), record)
    }

    /// Validate `record`, giving up when `ctx` is cancelled or expires.
    ///
    /// A configured timeout only ever shortens `ctx`'s own deadline.
    pub fn validate_ctx<R: Record + Rules>(&self, ctx: &Context, record: &R) -> Result<(), ValidateError> {
        let bounded;
        let ctx = match self.config.engine.timeout() {
            Some(timeout) => {
                bounded = ctx.child_with_timeout(timeout);
                &bounded
            }
            None => ctx,
        };

        let violations = match self.engine.evaluate(ctx, record) {
            Ok(()) => {
                debug!(record = R::NAME, labels = self.engine.uses_labels(), "validation passed");
                return Ok(());
            }
            Err(EngineError::Violations(violations)) => violations,
            Err(err) => {
                warn!(record = R::NAME, error = %err, "validation did not complete");
                return Err(ValidateError::Engine(err));
            }
        };

        let Some(errors) = FieldErrors::aggregate::<R, _>(violations, &self.config.messages.annotation)
        else {
            return Ok(());
        };

        debug!(
            record = R::NAME,
            failures = errors.len(),
            labels = self.engine.uses_labels(),
            "validation failed"
        );
        if self.config.logging.log_failures {
            for failure in &errors {
                debug!(
                    namespace = failure.namespace(),
                    tag = failure.tag(),
                    custom_message = failure.custom_message(),
                    "field failed validation"
                );
            }
        }

        Err(ValidateError::Invalid(errors))
    }
}
