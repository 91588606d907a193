//! Union type validator
//!
//! Each branch is tried against the same datum at the same path with a
//! forked state. The first branch that produces no errors accepts the datum.
//!
//! When every branch fails, the errors of the first failing composite branch
//! (array, map, record, error, request) are surfaced as-is, since they point
//! at the nested field or element that is wrong. If every failure is a scalar
//! mismatch, a single `UnionMismatch` summary is recorded at the union path.

use avro_document::Value;
use tracing::trace;

use crate::{SchemaKind, SchemaNodeContent, SchemaNodeId, UnionSchema};

use super::context::{ValidationContext, ValidationState};
use super::error::{ActualValue, ValidationError, ValidatorError};
use super::{DatumValidator, SchemaValidator};

/// Validates union values against UnionSchema.
pub(crate) struct UnionValidator<'a> {
    pub ctx: ValidationContext<'a>,
    pub schema: &'a UnionSchema,
    pub schema_node_id: SchemaNodeId,
}

impl DatumValidator for UnionValidator<'_> {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError> {
        let branch_kinds = self.branch_kinds()?;

        // A single branch is validated in place, without union framing.
        if let [only] = self.schema.branches.as_slice() {
            let child_validator = SchemaValidator {
                ctx: self.ctx,
                schema_node_id: *only,
            };
            return child_validator.validate(state, datum);
        }

        let mut failures = Vec::with_capacity(self.schema.branches.len());
        for (&branch, &kind) in self.schema.branches.iter().zip(&branch_kinds) {
            let mut trial = state.fork();
            let child_validator = SchemaValidator {
                ctx: self.ctx,
                schema_node_id: branch,
            };
            child_validator.validate(&mut trial, datum)?;

            if !trial.has_errors() {
                trace!(path = %state.path, branch = %kind, "union branch matched");
                return Ok(());
            }
            trace!(
                path = %state.path,
                branch = %kind,
                errors = trial.errors.len(),
                "union branch rejected"
            );
            failures.push((kind, trial));
        }

        match failures.into_iter().find(|(kind, _)| kind.is_composite()) {
            Some((kind, trial)) => {
                trace!(path = %state.path, branch = %kind, "reporting composite branch errors");
                state.merge(trial);
            }
            None => state.record_error(ValidationError::UnionMismatch {
                branches: branch_kinds,
                actual: ActualValue::of(datum),
            }),
        }

        Ok(())
    }
}

impl UnionValidator<'_> {
    /// Resolved kind of every branch, in declaration order.
    fn branch_kinds(&self) -> Result<Vec<SchemaKind>, ValidatorError> {
        self.schema
            .branches
            .iter()
            .map(|&branch| {
                let (_, content) = self.ctx.resolve(branch)?;
                if matches!(content, SchemaNodeContent::Union(_)) {
                    return Err(ValidatorError::NestedUnion {
                        union: self.schema_node_id,
                        branch,
                    });
                }
                Ok(content.kind())
            })
            .collect()
    }
}
