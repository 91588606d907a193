//! Datum model for Avro validation.
//!
//! A [`Value`] is the dynamically-typed runtime datum a schema is checked
//! against. [`DatumPath`] addresses a sub-value inside a nested datum.

/// A type-safe data-type of the Avro datum model.
pub mod value;

/// Data structure for representing a path inside a datum.
pub mod path;

/// Conversion from `serde_json::Value`.
pub mod json;

mod datum_macro;

pub use path::{DatumPath, PathSegment};
pub use value::{Map, ObjectKey, Value};

pub(crate) mod prelude_internal {
    #![allow(unused_imports)]
    pub use crate::path::{DatumPath, PathSegment};
    pub use crate::value::{Map, ObjectKey, Value};
    pub use thisisplural::Plural;
}
