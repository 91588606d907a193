//! Named type reference validator

use avro_document::Value;

use super::context::{ValidationContext, ValidationState};
use super::error::ValidatorError;
use super::{DatumValidator, SchemaValidator};

/// Validates against the named type a reference points to, at the same path.
pub(crate) struct ReferenceValidator<'a> {
    pub ctx: ValidationContext<'a>,
    pub name: &'a str,
}

impl DatumValidator for ReferenceValidator<'_> {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError> {
        let target = self.ctx.lookup_type(self.name)?;
        let (resolved_id, _) = self.ctx.resolve(target)?;

        let child_validator = SchemaValidator {
            ctx: self.ctx,
            schema_node_id: resolved_id,
        };
        child_validator.validate(state, datum)
    }
}
