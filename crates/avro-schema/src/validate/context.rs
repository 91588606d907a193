//! Validation context and state
//!
//! `ValidationContext` is the read-only part shared by every validator:
//! - Schema reference
//! - Validation options
//!
//! `ValidationState` is the mutable accumulator threaded through the
//! traversal by `&mut`:
//! - Current path for error reporting
//! - Accumulated errors
//!
//! Union probing forks the state (same path, no errors), validates a branch
//! against the fork, and merges the fork back only if its errors are chosen
//! for reporting.

use avro_document::{DatumPath, ObjectKey, PathSegment};

use crate::{SchemaDocument, SchemaNode, SchemaNodeContent, SchemaNodeId};

use super::error::{ValidationError, ValidatorError};
use super::options::ValidationOptions;
use super::output::ErrorSet;

/// Upper bound on reference hops while resolving a named type.
const MAX_REFERENCE_HOPS: usize = 64;

// =============================================================================
// ValidationState (mutable accumulator)
// =============================================================================

#[derive(Debug, Clone)]
pub struct ValidationState {
    /// Current path in the datum (for error reporting)
    pub path: DatumPath,
    /// Accumulated validation errors
    pub errors: ErrorSet,
}

impl ValidationState {
    pub fn new(root_identifier: impl Into<String>) -> Self {
        Self {
            path: DatumPath::root(),
            errors: ErrorSet::new(root_identifier),
        }
    }

    /// Record an error at the current path (validation continues).
    pub fn record_error(&mut self, error: ValidationError) {
        self.errors.push(self.path.clone(), error);
    }

    /// Check if any errors have been recorded.
    pub fn has_errors(&self) -> bool {
        self.errors.is_failure()
    }

    // -------------------------------------------------------------------------
    // Path management
    // -------------------------------------------------------------------------

    /// Push a record field name to the path.
    pub fn push_path_field(&mut self, name: impl Into<String>) {
        self.path.0.push(PathSegment::Field(name.into()));
    }

    /// Push a map key to the path.
    pub fn push_path_key(&mut self, key: ObjectKey) {
        self.path.0.push(PathSegment::Key(key));
    }

    /// Push an array index to the path.
    pub fn push_path_index(&mut self, index: usize) {
        self.path.0.push(PathSegment::Index(index));
    }

    /// Pop the last segment from the path.
    pub fn pop_path(&mut self) {
        self.path.0.pop();
    }

    /// Fresh state rooted at the current path (trial validation).
    pub fn fork(&self) -> Self {
        Self {
            path: self.path.clone(),
            errors: ErrorSet::new(self.errors.root_identifier()),
        }
    }

    /// Merge errors from a forked state.
    pub fn merge(&mut self, other: Self) {
        self.errors.merge(other.errors);
    }

    /// Consume and produce final output.
    pub fn finish(self) -> ErrorSet {
        self.errors
    }
}

// =============================================================================
// ValidationContext (shared, read-only)
// =============================================================================

/// Schema and options shared by every validator during one run.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// Reference to the schema being validated against
    pub schema: &'a SchemaDocument,
    pub options: &'a ValidationOptions,
}

impl<'a> ValidationContext<'a> {
    pub fn new(schema: &'a SchemaDocument, options: &'a ValidationOptions) -> Self {
        Self { schema, options }
    }

    /// Get a node, failing if the id is outside the schema arena.
    pub fn node(&self, id: SchemaNodeId) -> Result<&'a SchemaNode, ValidatorError> {
        self.schema
            .get_node(id)
            .ok_or(ValidatorError::UndefinedSchemaNode { id })
    }

    /// Look up a named type.
    pub fn lookup_type(&self, name: &str) -> Result<SchemaNodeId, ValidatorError> {
        self.schema
            .get_type(name)
            .ok_or_else(|| ValidatorError::UndefinedTypeReference {
                name: name.to_string(),
            })
    }

    /// Follow references until a concrete schema node is reached.
    pub fn resolve(
        &self,
        schema_id: SchemaNodeId,
    ) -> Result<(SchemaNodeId, &'a SchemaNodeContent), ValidatorError> {
        let mut current_id = schema_id;
        let mut last_name = None;
        for _ in 0..MAX_REFERENCE_HOPS {
            match &self.node(current_id)?.content {
                SchemaNodeContent::Reference(name) => {
                    current_id = self.lookup_type(name)?;
                    last_name = Some(name);
                }
                content => return Ok((current_id, content)),
            }
        }
        Err(ValidatorError::CircularReference {
            name: last_name.cloned().unwrap_or_default(),
        })
    }
}
