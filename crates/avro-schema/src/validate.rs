//! Datum validation
//!
//! # Architecture
//!
//! - `SchemaValidator`: Dispatches to type-specific validators based on `SchemaNodeContent`
//! - Type validators: Implement `DatumValidator`
//! - `ValidationContext`: Schema and options shared by every validator
//! - `ValidationState`: Current path and accumulated errors, passed by `&mut`
//!
//! # Error Handling
//!
//! Two categories of errors:
//! - `ValidationError`: Data mismatches accumulated in the `ErrorSet` (non-fatal)
//! - `ValidatorError`: Malformed schema causing fail-fast (e.g., undefined references)

mod compound;
mod context;
mod error;
mod options;
mod output;
mod primitive;
mod record;
mod reference;
mod union;

pub use context::{ValidationContext, ValidationState};
pub use error::{ActualValue, StrictValidationError, ValidationError, ValidatorError};
pub use options::ValidationOptions;
pub use output::ErrorSet;

use avro_document::Value;
use tracing::debug;

use crate::{SchemaDocument, SchemaKind, SchemaNodeContent, SchemaNodeId};

use compound::{ArrayValidator, MapValidator};
use primitive::{
    BooleanValidator, BytesValidator, EnumValidator, FixedValidator, FloatValidator,
    IntegerValidator, NullValidator,
};
use record::RecordValidator;
use reference::ReferenceValidator;
use union::UnionValidator;

// =============================================================================
// Public API
// =============================================================================

/// Validate a datum against the root of a schema.
///
/// Data mismatches never make this fail; they are collected in the returned
/// [`ErrorSet`]. `Err` means the schema itself is malformed.
///
/// # Example
///
/// ```
/// use avro_document::datum;
/// use avro_schema::{SchemaBuilder, validate};
///
/// let mut b = SchemaBuilder::new();
/// let int = b.int();
/// let tags = b.array(int);
/// let root = b.record("Post", [("tags", tags)]);
/// let schema = b.finish(root);
///
/// let errors = validate(&schema, &datum!({"tags": [1, "two"]})).unwrap();
/// assert_eq!(
///     errors.to_string(),
///     "at .tags[1] expected type int, got string with value \"two\""
/// );
/// ```
pub fn validate(schema: &SchemaDocument, datum: &Value) -> Result<ErrorSet, ValidatorError> {
    validate_with_options(schema, datum, &ValidationOptions::default())
}

/// Validate a datum against the root of a schema with explicit options.
pub fn validate_with_options(
    schema: &SchemaDocument,
    datum: &Value,
    options: &ValidationOptions,
) -> Result<ErrorSet, ValidatorError> {
    validate_node(schema, schema.root, datum, options)
}

/// Validate a datum against a specific schema node.
pub fn validate_node(
    schema: &SchemaDocument,
    schema_id: SchemaNodeId,
    datum: &Value,
    options: &ValidationOptions,
) -> Result<ErrorSet, ValidatorError> {
    debug!(schema_node = schema_id.0, "validating datum");

    let ctx = ValidationContext::new(schema, options);
    let mut state = ValidationState::new(options.root_identifier.as_str());
    let validator = SchemaValidator {
        ctx,
        schema_node_id: schema_id,
    };
    validator.validate(&mut state, datum)?;

    let errors = state.finish();
    debug!(errors = errors.len(), "validation finished");
    Ok(errors)
}

/// Validate and fail unless the datum conforms.
pub fn validate_strict(schema: &SchemaDocument, datum: &Value) -> Result<(), StrictValidationError> {
    Validator::new(schema, datum).validate_strict()
}

// =============================================================================
// Validator
// =============================================================================

/// A schema/datum pair with the options to validate it under.
#[derive(Debug, Clone)]
pub struct Validator<'a> {
    schema: &'a SchemaDocument,
    datum: &'a Value,
    options: ValidationOptions,
}

impl<'a> Validator<'a> {
    pub fn new(schema: &'a SchemaDocument, datum: &'a Value) -> Self {
        Self {
            schema,
            datum,
            options: ValidationOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ValidationOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Run the full traversal once and return every error found.
    pub fn validate(&self) -> Result<ErrorSet, ValidatorError> {
        validate_with_options(self.schema, self.datum, &self.options)
    }

    /// Like [`validate`](Self::validate), but a non-empty result is an error.
    pub fn validate_strict(&self) -> Result<(), StrictValidationError> {
        let errors = self.validate()?;
        if errors.is_failure() {
            return Err(StrictValidationError::Invalid(errors));
        }
        Ok(())
    }
}

// =============================================================================
// SchemaValidator (main dispatcher)
// =============================================================================

/// Validator for one schema kind. Data errors go to `state`; `Err` aborts
/// the whole run.
pub(crate) trait DatumValidator {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError>;
}

/// Main validator that dispatches to type-specific validators.
pub(crate) struct SchemaValidator<'a> {
    pub ctx: ValidationContext<'a>,
    pub schema_node_id: SchemaNodeId,
}

impl DatumValidator for SchemaValidator<'_> {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError> {
        let ctx = self.ctx;
        let schema_node = ctx.node(self.schema_node_id)?;

        match &schema_node.content {
            SchemaNodeContent::Null => NullValidator.validate(state, datum),
            SchemaNodeContent::Boolean => BooleanValidator.validate(state, datum),
            SchemaNodeContent::Int => IntegerValidator {
                kind: SchemaKind::Int,
            }
            .validate(state, datum),
            SchemaNodeContent::Long => IntegerValidator {
                kind: SchemaKind::Long,
            }
            .validate(state, datum),
            SchemaNodeContent::Float => FloatValidator {
                kind: SchemaKind::Float,
            }
            .validate(state, datum),
            SchemaNodeContent::Double => FloatValidator {
                kind: SchemaKind::Double,
            }
            .validate(state, datum),
            SchemaNodeContent::String => BytesValidator {
                kind: SchemaKind::String,
            }
            .validate(state, datum),
            SchemaNodeContent::Bytes => BytesValidator {
                kind: SchemaKind::Bytes,
            }
            .validate(state, datum),
            SchemaNodeContent::Fixed(s) => FixedValidator { schema: s }.validate(state, datum),
            SchemaNodeContent::Enum(s) => EnumValidator { schema: s }.validate(state, datum),
            SchemaNodeContent::Array(s) => ArrayValidator { ctx, schema: s }.validate(state, datum),
            SchemaNodeContent::Map(s) => MapValidator { ctx, schema: s }.validate(state, datum),
            SchemaNodeContent::Record(s) => {
                RecordValidator { ctx, schema: s }.validate(state, datum)
            }
            SchemaNodeContent::Union(s) => UnionValidator {
                ctx,
                schema: s,
                schema_node_id: self.schema_node_id,
            }
            .validate(state, datum),
            SchemaNodeContent::Reference(name) => ReferenceValidator { ctx, name }.validate(state, datum),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
