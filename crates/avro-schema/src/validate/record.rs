//! Record type validator
//!
//! Validates records, errors and requests against RecordSchema.

use avro_document::{ObjectKey, Value};

use crate::RecordSchema;

use super::context::{ValidationContext, ValidationState};
use super::error::{ValidationError, ValidatorError};
use super::{DatumValidator, SchemaValidator};

/// Datum a missing field is validated as.
static MISSING: Value = Value::Null;

/// Validates record values against RecordSchema.
///
/// Every declared field is validated, absent ones as null. Keys the schema
/// does not declare are ignored unless `fail_on_extra_fields` is set.
pub(crate) struct RecordValidator<'a> {
    pub ctx: ValidationContext<'a>,
    pub schema: &'a RecordSchema,
}

impl DatumValidator for RecordValidator<'_> {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError> {
        let Value::Map(map) = datum else {
            state.record_error(ValidationError::type_mismatch(
                self.schema.kind.into(),
                datum,
            ));
            return Ok(());
        };

        if self.ctx.options.recursive {
            for field in &self.schema.fields {
                let value = map
                    .get(&ObjectKey::String(field.name.clone()))
                    .unwrap_or(&MISSING);

                state.push_path_field(field.name.as_str());
                let child_validator = SchemaValidator {
                    ctx: self.ctx,
                    schema_node_id: field.schema,
                };
                let result = child_validator.validate(state, value);
                state.pop_path();
                result?;
            }
        }

        if self.ctx.options.fail_on_extra_fields {
            for key in map.keys() {
                let declared = key
                    .as_str()
                    .is_some_and(|name| self.schema.fields.iter().any(|f| f.name == name));
                if !declared {
                    state.record_error(ValidationError::ExtraField {
                        field: key.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
