//! Schema representation types
//!
//! Schemas are stored in an arena ([`SchemaDocument::nodes`]) and refer to
//! each other by [`SchemaNodeId`]. Named types (records, enums, fixeds) are
//! registered in [`SchemaDocument::types`] so that [`SchemaNodeContent::Reference`]
//! can point at them, which is how recursive schemas are expressed.

use core::fmt::{self, Display};

use indexmap::IndexMap;

/// Index of a node inside a [`SchemaDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SchemaNodeId(pub usize);

/// A fully built schema.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDocument {
    /// All schema nodes
    pub nodes: Vec<SchemaNode>,
    /// Node a datum is validated against by default
    pub root: SchemaNodeId,
    /// Named types, by full name
    pub types: IndexMap<String, SchemaNodeId>,
}

impl SchemaDocument {
    /// Get a node by id, or `None` if the id does not belong to this document.
    pub fn get_node(&self, id: SchemaNodeId) -> Option<&SchemaNode> {
        self.nodes.get(id.0)
    }

    /// Look up a named type.
    pub fn get_type(&self, name: &str) -> Option<SchemaNodeId> {
        self.types.get(name).copied()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    pub content: SchemaNodeContent,
}

/// Type-specific content of a schema node.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNodeContent {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    String,
    Bytes,
    Fixed(FixedSchema),
    Enum(EnumSchema),
    Array(ArraySchema),
    Map(MapSchema),
    /// Records, errors and requests share one structure
    Record(RecordSchema),
    Union(UnionSchema),
    /// Reference to a named type in [`SchemaDocument::types`]
    Reference(String),
}

impl SchemaNodeContent {
    pub fn kind(&self) -> SchemaKind {
        match self {
            Self::Null => SchemaKind::Null,
            Self::Boolean => SchemaKind::Boolean,
            Self::Int => SchemaKind::Int,
            Self::Long => SchemaKind::Long,
            Self::Float => SchemaKind::Float,
            Self::Double => SchemaKind::Double,
            Self::String => SchemaKind::String,
            Self::Bytes => SchemaKind::Bytes,
            Self::Fixed(_) => SchemaKind::Fixed,
            Self::Enum(_) => SchemaKind::Enum,
            Self::Array(_) => SchemaKind::Array,
            Self::Map(_) => SchemaKind::Map,
            Self::Record(r) => r.kind.into(),
            Self::Union(_) => SchemaKind::Union,
            Self::Reference(_) => SchemaKind::Reference,
        }
    }
}

/// The type tag of a schema node, as it appears in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    String,
    Bytes,
    Fixed,
    Enum,
    Array,
    Map,
    Record,
    Error,
    Request,
    Union,
    Reference,
}

impl SchemaKind {
    /// Kinds that contain nested schemas, whose validation errors carry
    /// more detail than a plain type mismatch.
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            Self::Array | Self::Map | Self::Record | Self::Error | Self::Request
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Fixed => "fixed",
            Self::Enum => "enum",
            Self::Array => "array",
            Self::Map => "map",
            Self::Record => "record",
            Self::Error => "error",
            Self::Request => "request",
            Self::Union => "union",
            Self::Reference => "reference",
        }
    }
}

impl Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedSchema {
    pub name: String,
    /// Exact byte length
    pub size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumSchema {
    pub name: String,
    pub symbols: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArraySchema {
    pub items: SchemaNodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSchema {
    pub values: SchemaNodeId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordKind {
    #[default]
    Record,
    Error,
    Request,
}

impl From<RecordKind> for SchemaKind {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Record => SchemaKind::Record,
            RecordKind::Error => SchemaKind::Error,
            RecordKind::Request => SchemaKind::Request,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    pub kind: RecordKind,
    pub name: String,
    /// Declared fields, in declaration order
    pub fields: Vec<RecordField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    pub name: String,
    pub schema: SchemaNodeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionSchema {
    /// Branches, in declaration order
    pub branches: Vec<SchemaNodeId>,
}
