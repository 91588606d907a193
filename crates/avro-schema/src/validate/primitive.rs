//! Primitive type validators
//!
//! Validators for: Null, Boolean, Int, Long, Float, Double, String, Bytes,
//! Fixed, Enum. None of them descend into the datum, so they only need the
//! validation state to record errors.

use avro_document::{ObjectKey, Value};
use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::{EnumSchema, FixedSchema, SchemaKind};

use super::DatumValidator;
use super::context::ValidationState;
use super::error::{ActualValue, ValidationError, ValidatorError};

// =============================================================================
// Helper: datum type names for error messages
// =============================================================================

/// Avro type name describing a datum's runtime kind.
pub(crate) fn avro_type_name(datum: &Value) -> &'static str {
    match datum {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Integer(n) => integer_type_name(n),
        Value::Float(_) => "float",
        Value::String(_) => "string",
        Value::Bytes(_) => "bytes",
        Value::Array(_) => "array",
        Value::Map(_) => "record",
    }
}

/// Avro type name of a map key.
pub(crate) fn key_type_name(key: &ObjectKey) -> &'static str {
    match key {
        ObjectKey::Bool(_) => "boolean",
        ObjectKey::Number(n) => integer_type_name(n),
        ObjectKey::String(_) => "string",
    }
}

fn integer_type_name(n: &BigInt) -> &'static str {
    if n.to_i32().is_some() { "int" } else { "long" }
}

// =============================================================================
// NullValidator
// =============================================================================

pub(crate) struct NullValidator;

impl DatumValidator for NullValidator {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError> {
        if !datum.is_null() {
            state.record_error(ValidationError::type_mismatch(SchemaKind::Null, datum));
        }
        Ok(())
    }
}

// =============================================================================
// BooleanValidator
// =============================================================================

pub(crate) struct BooleanValidator;

impl DatumValidator for BooleanValidator {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError> {
        if !matches!(datum, Value::Bool(_)) {
            state.record_error(ValidationError::type_mismatch(SchemaKind::Boolean, datum));
        }
        Ok(())
    }
}

// =============================================================================
// IntegerValidator
// =============================================================================

/// Validates `int` (32-bit) and `long` (64-bit) datums.
///
/// An integer outside the range is reported as `OutOfRange` only, never as
/// a type mismatch as well.
pub(crate) struct IntegerValidator {
    pub kind: SchemaKind,
}

impl IntegerValidator {
    fn in_range(&self, n: &BigInt) -> bool {
        match self.kind {
            SchemaKind::Int => n.to_i32().is_some(),
            _ => n.to_i64().is_some(),
        }
    }
}

impl DatumValidator for IntegerValidator {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError> {
        match datum {
            Value::Integer(n) if self.in_range(n) => {}
            Value::Integer(n) => state.record_error(ValidationError::OutOfRange {
                expected: self.kind,
                value: n.clone(),
            }),
            _ => state.record_error(ValidationError::type_mismatch(self.kind, datum)),
        }
        Ok(())
    }
}

// =============================================================================
// FloatValidator
// =============================================================================

/// Validates `float` and `double` datums. Integers are valid floating-point data.
pub(crate) struct FloatValidator {
    pub kind: SchemaKind,
}

impl DatumValidator for FloatValidator {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError> {
        if !matches!(datum, Value::Float(_) | Value::Integer(_)) {
            state.record_error(ValidationError::type_mismatch(self.kind, datum));
        }
        Ok(())
    }
}

// =============================================================================
// BytesValidator
// =============================================================================

/// Validates `string` and `bytes` datums. Content is not constrained.
pub(crate) struct BytesValidator {
    pub kind: SchemaKind,
}

impl DatumValidator for BytesValidator {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError> {
        if datum.as_bytes().is_none() {
            state.record_error(ValidationError::type_mismatch(self.kind, datum));
        }
        Ok(())
    }
}

// =============================================================================
// FixedValidator
// =============================================================================

pub(crate) struct FixedValidator<'s> {
    pub schema: &'s FixedSchema,
}

impl DatumValidator for FixedValidator<'_> {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError> {
        let expected = self.schema.size;
        match datum.as_bytes() {
            Some(bytes) if bytes.len() == expected => {}
            Some(bytes) => state.record_error(ValidationError::SizeMismatch {
                expected,
                actual: bytes.len(),
                value: datum.to_string(),
            }),
            None => state.record_error(ValidationError::FixedTypeMismatch {
                expected,
                actual: ActualValue::of(datum),
            }),
        }
        Ok(())
    }
}

// =============================================================================
// EnumValidator
// =============================================================================

/// Membership test on the datum itself: only a string equal to one of the
/// declared symbols passes.
pub(crate) struct EnumValidator<'s> {
    pub schema: &'s EnumSchema,
}

impl DatumValidator for EnumValidator<'_> {
    fn validate(&self, state: &mut ValidationState, datum: &Value) -> Result<(), ValidatorError> {
        let is_member = datum
            .as_str()
            .is_some_and(|s| self.schema.symbols.iter().any(|symbol| symbol == s));
        if !is_member {
            state.record_error(ValidationError::EnumMismatch {
                symbols: self.schema.symbols.clone(),
                actual: ActualValue::of(datum),
            });
        }
        Ok(())
    }
}
