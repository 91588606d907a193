//! Avro schema model and datum validation.
//!
//! A [`SchemaDocument`] is an arena of [`SchemaNode`]s built by a schema
//! parser (or by hand with [`SchemaBuilder`]). The [`validate`] module checks
//! an [`avro_document::Value`] against it and reports every mismatch keyed
//! by its location inside the datum.

mod build;
mod schema;
pub mod validate;

pub use build::SchemaBuilder;
pub use schema::{
    ArraySchema, EnumSchema, FixedSchema, MapSchema, RecordField, RecordKind, RecordSchema,
    SchemaDocument, SchemaKind, SchemaNode, SchemaNodeContent, SchemaNodeId, UnionSchema,
};
pub use validate::{
    ActualValue, ErrorSet, StrictValidationError, ValidationError, ValidationOptions, Validator,
    ValidatorError, validate, validate_node, validate_strict, validate_with_options,
};
