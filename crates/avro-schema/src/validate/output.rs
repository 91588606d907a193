//! Validation output
//!
//! [`ErrorSet`] maps each datum path to every error raised there, in the
//! order paths were first reported and errors were raised. Paths are grouped
//! by their rendered form, so a map key `1` and a map key `"1"` share one
//! entry.

use core::fmt::{self, Display};

use avro_document::DatumPath;
use avro_document::path::ROOT_IDENTIFIER;
use indexmap::IndexMap;

use super::error::ValidationError;

/// Path-keyed collection of every diagnostic produced by one validation run.
///
/// An empty set means the datum conforms to the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorSet {
    root_identifier: String,
    /// Keyed by the path rendered under [`ROOT_IDENTIFIER`]; holds the first
    /// path reported with that rendering and its errors.
    entries: IndexMap<String, (DatumPath, Vec<ValidationError>)>,
}

impl ErrorSet {
    /// Create an empty set whose paths render under `root_identifier`.
    pub fn new(root_identifier: impl Into<String>) -> Self {
        Self {
            root_identifier: root_identifier.into(),
            entries: IndexMap::new(),
        }
    }

    pub(crate) fn push(&mut self, path: DatumPath, error: ValidationError) {
        self.entry(path).push(error);
    }

    /// Append another set's errors, keeping their paths.
    pub(crate) fn merge(&mut self, other: ErrorSet) {
        for (_, (path, errors)) in other.entries {
            self.entry(path).extend(errors);
        }
    }

    fn entry(&mut self, path: DatumPath) -> &mut Vec<ValidationError> {
        let key = path.render(ROOT_IDENTIFIER);
        &mut self.entries.entry(key).or_insert_with(|| (path, Vec::new())).1
    }

    pub fn root_identifier(&self) -> &str {
        &self.root_identifier
    }

    pub fn is_success(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Total number of errors across all paths.
    pub fn len(&self) -> usize {
        self.entries.values().map(|(_, errors)| errors.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Errors recorded at `path`, or at any path that renders the same.
    pub fn get(&self, path: &DatumPath) -> Option<&[ValidationError]> {
        self.entries
            .get(&path.render(ROOT_IDENTIFIER))
            .map(|(_, errors)| errors.as_slice())
    }

    /// Paths that carry at least one error.
    pub fn paths(&self) -> impl Iterator<Item = &DatumPath> {
        self.entries.values().map(|(path, _)| path)
    }

    /// Every `(path, error)` pair in path-then-error order.
    pub fn iter(&self) -> impl Iterator<Item = (&DatumPath, &ValidationError)> {
        self.entries
            .values()
            .flat_map(|(path, errors)| errors.iter().map(move |error| (path, error)))
    }

    /// Formatted diagnostics, one `at <path> <message>` line per error.
    pub fn errors(&self) -> Vec<String> {
        self.iter()
            .map(|(path, error)| format!("at {} {}", path.render(&self.root_identifier), error))
            .collect()
    }
}

impl Default for ErrorSet {
    fn default() -> Self {
        Self::new(ROOT_IDENTIFIER)
    }
}

impl Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.errors().join("\n"))
    }
}
