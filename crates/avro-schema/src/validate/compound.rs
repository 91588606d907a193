//! Compound type validators
//!
//! Validators for: Array, Map
//! Uses SchemaValidator for child validation.

use avro_document::{ObjectKey, Value};

use crate::{ArraySchema, MapSchema, SchemaKind};

use super::context::{ValidationContext, ValidationState};
use super::error::{ValidationError, ValidatorError};
use super::{DatumValidator, SchemaValidator};

// =============================================================================
// ArrayValidator
// =============================================================================

/// Validates every element of an array datum against the item schema.
pub(crate) struct ArrayValidator<'a> {
    pub ctx: ValidationContext<'a>,
    pub schema: &'a ArraySchema,
}

impl DatumValidator for ArrayValidator<'_> {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError> {
        let Value::Array(items) = datum else {
            state.record_error(ValidationError::type_mismatch(SchemaKind::Array, datum));
            return Ok(());
        };

        if !self.ctx.options.recursive {
            return Ok(());
        }

        let child_validator = SchemaValidator {
            ctx: self.ctx,
            schema_node_id: self.schema.items,
        };
        for (i, item) in items.iter().enumerate() {
            state.push_path_index(i);
            let result = child_validator.validate(state, item);
            state.pop_path();
            result?;
        }

        Ok(())
    }
}

// =============================================================================
// MapValidator
// =============================================================================

/// Validates map datums: every key must be a string, every value must
/// match the value schema. Key errors do not stop value validation.
pub(crate) struct MapValidator<'a> {
    pub ctx: ValidationContext<'a>,
    pub schema: &'a MapSchema,
}

impl DatumValidator for MapValidator<'_> {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError> {
        let Value::Map(map) = datum else {
            state.record_error(ValidationError::type_mismatch(SchemaKind::Map, datum));
            return Ok(());
        };

        for key in map.keys() {
            if !matches!(key, ObjectKey::String(_)) {
                state.record_error(ValidationError::InvalidMapKey { key: key.clone() });
            }
        }

        if !self.ctx.options.recursive {
            return Ok(());
        }

        let child_validator = SchemaValidator {
            ctx: self.ctx,
            schema_node_id: self.schema.values,
        };
        for (key, value) in map {
            state.push_path_key(key.clone());
            let result = child_validator.validate(state, value);
            state.pop_path();
            result?;
        }

        Ok(())
    }
}
