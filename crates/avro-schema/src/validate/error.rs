//! Validation error types
//!
//! Three categories of errors:
//! - `ValidationError`: Data errors accumulated during validation (non-fatal).
//!   Their `Display` is the message reported next to the datum path.
//! - `ValidatorError`: Malformed schema, causing fail-fast behavior
//! - `StrictValidationError`: Returned by the strict entry points when the
//!   datum does not conform

use core::fmt::{self, Display};

use avro_document::{ObjectKey, Value};
use num_bigint::BigInt;
use thiserror::Error;

use crate::{SchemaKind, SchemaNodeId};

use super::output::ErrorSet;
use super::primitive::{avro_type_name, key_type_name};

// =============================================================================
// ValidatorError (fail-fast internal errors)
// =============================================================================

/// Errors that abort validation.
///
/// These describe a schema document that cannot be validated against at all,
/// not a datum that fails to conform.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidatorError {
    /// A node refers to an id outside the schema arena
    #[error("undefined schema node: #{}", .id.0)]
    UndefinedSchemaNode { id: SchemaNodeId },

    /// Undefined named type reference in schema
    #[error("undefined type reference: {name}")]
    UndefinedTypeReference { name: String },

    /// A chain of references never reaches a concrete type
    #[error("circular type reference: {name}")]
    CircularReference { name: String },

    /// Avro unions may not immediately contain other unions
    #[error("union #{} directly contains another union (branch #{})", .union.0, .branch.0)]
    NestedUnion {
        union: SchemaNodeId,
        branch: SchemaNodeId,
    },
}

// =============================================================================
// StrictValidationError
// =============================================================================

/// Failure of [`validate_strict`](super::validate_strict).
#[derive(Debug, Clone, Error)]
pub enum StrictValidationError {
    /// The datum does not conform; carries every diagnostic found
    #[error("{0}")]
    Invalid(ErrorSet),

    #[error(transparent)]
    Validator(#[from] ValidatorError),
}

impl StrictValidationError {
    /// Get the collected diagnostics if the datum was rejected.
    pub fn error_set(&self) -> Option<&ErrorSet> {
        match self {
            StrictValidationError::Invalid(set) => Some(set),
            StrictValidationError::Validator(_) => None,
        }
    }
}

// =============================================================================
// ActualValue (diagnostic rendering of the offending datum)
// =============================================================================

/// Type name and literal of an offending datum, rendered as
/// `<type>` for null and `<type> with value <literal>` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActualValue {
    pub type_name: &'static str,
    pub literal: Option<String>,
}

impl ActualValue {
    pub fn of(datum: &Value) -> Self {
        Self {
            type_name: avro_type_name(datum),
            literal: (!datum.is_null()).then(|| datum.to_string()),
        }
    }
}

impl Display for ActualValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} with value {}", self.type_name, literal),
            None => f.write_str(self.type_name),
        }
    }
}

// =============================================================================
// ValidationError (accumulated data errors)
// =============================================================================

/// Mismatches between a datum and the schema, recorded at a datum path.
///
/// Validation continues after recording these errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("expected type {expected}, got {actual}")]
    TypeMismatch {
        expected: SchemaKind,
        actual: ActualValue,
    },

    /// Integer datum outside the `int` or `long` range
    #[error("out of bound value {value}")]
    OutOfRange { expected: SchemaKind, value: BigInt },

    #[error("expected fixed with size {expected}, got {value} with size {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        value: String,
    },

    /// Non byte-sequence datum for a fixed schema
    #[error("expected fixed with size {expected}, got {actual}")]
    FixedTypeMismatch { expected: usize, actual: ActualValue },

    #[error("expected enum with values {}, got {actual}", format_symbols(.symbols))]
    EnumMismatch {
        symbols: Vec<String>,
        actual: ActualValue,
    },

    #[error("unexpected key type '{}' in map", key_type_name(.key))]
    InvalidMapKey { key: ObjectKey },

    /// No branch of a union accepted the datum and none of the failed
    /// branches was composite.
    #[error("expected union of [{}], got {actual}", format_branches(.branches))]
    UnionMismatch {
        branches: Vec<SchemaKind>,
        actual: ActualValue,
    },

    #[error("extra field '{field}' - not in schema")]
    ExtraField { field: String },
}

impl ValidationError {
    pub fn type_mismatch(expected: SchemaKind, datum: &Value) -> Self {
        Self::TypeMismatch {
            expected,
            actual: ActualValue::of(datum),
        }
    }
}

fn format_symbols(symbols: &[String]) -> String {
    let quoted: Vec<String> = symbols.iter().map(|s| format!("{:?}", s)).collect();
    format!("[{}]", quoted.join(", "))
}

fn format_branches(branches: &[SchemaKind]) -> String {
    let quoted: Vec<String> = branches.iter().map(|k| format!("'{}'", k)).collect();
    quoted.join(", ")
}
