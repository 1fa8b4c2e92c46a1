//! Validation Engine
//!
//! Orchestrates one validation call: structural check, system checks when
//! the shape is sound, user adherence regardless, then aggregation.

use serde_json::Value;

use crate::constraints::{derive, SystemConstraintSpec, UserConstraints};
use crate::schema::{FieldIssue, SchemaValidator, StructuralOutcome, StructuralValidator};
use crate::tokens::{token_validator, DesignTokens};

use super::adherence::check_user_adherence;
use super::checker::{run_system_checks, SystemResults};
use super::report::ValidationReport;

/// Token validation engine bound to one system spec
#[derive(Debug, Clone)]
pub struct Engine<V = SchemaValidator> {
    spec: SystemConstraintSpec,
    validator: V,
}

impl Engine {
    /// Engine using the built-in token schema
    pub fn new(spec: SystemConstraintSpec) -> Self {
        Self::with_validator(spec, token_validator())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(SystemConstraintSpec::builtin())
    }
}

impl<V: StructuralValidator> Engine<V> {
    /// Engine using a caller-supplied structural validator
    pub fn with_validator(spec: SystemConstraintSpec, validator: V) -> Self {
        Self { spec, validator }
    }

    pub fn spec(&self) -> &SystemConstraintSpec {
        &self.spec
    }

    /// Validate a raw token document against the system spec and the
    /// user's constraints
    pub fn validate(&self, tokens: &Value, user: &UserConstraints) -> ValidationReport {
        let mut structural = self.validator.validate(tokens);
        let typed = if structural.ok {
            typed_tokens(tokens, &mut structural)
        } else {
            None
        };

        let system = match &typed {
            Some(tokens) => run_system_checks(tokens, &self.spec, user.accessibility_target),
            None => {
                log::debug!(
                    "skipping system checks: {} structural error(s)",
                    structural.errors.len()
                );
                SystemResults::skipped()
            }
        };

        let derived = derive(user);
        let adherence = check_user_adherence(tokens, user, &derived);

        let report = ValidationReport::assemble(structural, system, adherence);
        log::debug!(
            "validation finished: pass={}, failures={}",
            report.summary.system_pass,
            report.summary.system_failures
        );
        report
    }
}

/// Type a document the validator accepted. A validator looser than the
/// typed model turns into a structural failure rather than a panic.
fn typed_tokens(tokens: &Value, structural: &mut StructuralOutcome) -> Option<DesignTokens> {
    match serde_json::from_value(tokens.clone()) {
        Ok(typed) => Some(typed),
        Err(e) => {
            log::warn!(
                "token document passed structural validation but did not deserialize: {}",
                e
            );
            structural.errors.push(FieldIssue {
                path: "#".to_string(),
                message: e.to_string(),
            });
            structural.ok = false;
            None
        }
    }
}

/// Validate with a default engine for the given spec
pub fn validate_tokens(
    tokens: &Value,
    user: &UserConstraints,
    spec: &SystemConstraintSpec,
) -> ValidationReport {
    Engine::new(spec.clone()).validate(tokens, user)
}
