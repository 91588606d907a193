use avro_document::path::ROOT_IDENTIFIER;

/// Knobs for a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Prefix paths are rendered under, `.` by default
    pub root_identifier: String,
    /// Descend into array items, map values and record fields.
    ///
    /// When false only the shape of each composite datum is checked.
    pub recursive: bool,
    /// Report record datum keys that are not declared fields
    pub fail_on_extra_fields: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            root_identifier: ROOT_IDENTIFIER.to_string(),
            recursive: true,
            fail_on_extra_fields: false,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_identifier(mut self, root_identifier: impl Into<String>) -> Self {
        self.root_identifier = root_identifier.into();
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn fail_on_extra_fields(mut self, fail: bool) -> Self {
        self.fail_on_extra_fields = fail;
        self
    }
}
