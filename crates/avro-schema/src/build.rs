//! Programmatic schema construction
//!
//! [`SchemaBuilder`] fills a [`SchemaDocument`] arena node by node. Named
//! types (record, enum, fixed) are registered under their name as they are
//! created. Recursive types reserve a slot first:
//!
//! ```
//! use avro_schema::{RecordKind, SchemaBuilder};
//!
//! let mut b = SchemaBuilder::new();
//! let node = b.reserve();
//! b.register_type("Node", node);
//!
//! let value = b.int();
//! let null = b.null();
//! let next_ref = b.reference("Node");
//! let next = b.union([null, next_ref]);
//! b.set_record(node, RecordKind::Record, "Node", [("value", value), ("next", next)]);
//!
//! let schema = b.finish(node);
//! assert_eq!(schema.get_type("Node"), Some(node));
//! ```

use indexmap::IndexMap;

use crate::{
    ArraySchema, EnumSchema, FixedSchema, MapSchema, RecordField, RecordKind, RecordSchema,
    SchemaDocument, SchemaNode, SchemaNodeContent, SchemaNodeId, UnionSchema,
};

/// Builder for constructing schema documents.
pub struct SchemaBuilder {
    doc: SchemaDocument,
}

impl SchemaBuilder {
    /// Create a new schema builder.
    pub fn new() -> Self {
        Self {
            doc: SchemaDocument {
                nodes: Vec::new(),
                root: SchemaNodeId(0), // Will be set in finish()
                types: IndexMap::new(),
            },
        }
    }

    /// Create a schema node with the given content.
    pub fn create_node(&mut self, content: SchemaNodeContent) -> SchemaNodeId {
        let id = SchemaNodeId(self.doc.nodes.len());
        self.doc.nodes.push(SchemaNode { content });
        id
    }

    /// Reserve a node slot, returning its ID.
    ///
    /// The node is initialized with `Null` content and should be finalized
    /// with [`set`](Self::set) or [`set_record`](Self::set_record).
    pub fn reserve(&mut self) -> SchemaNodeId {
        self.create_node(SchemaNodeContent::Null)
    }

    /// Replace the content of an existing node.
    pub fn set(&mut self, id: SchemaNodeId, content: SchemaNodeContent) {
        self.node_mut(id).content = content;
    }

    /// Get mutable access to a node.
    pub fn node_mut(&mut self, id: SchemaNodeId) -> &mut SchemaNode {
        &mut self.doc.nodes[id.0]
    }

    /// Register a named type.
    pub fn register_type(&mut self, name: impl Into<String>, id: SchemaNodeId) {
        self.doc.types.insert(name.into(), id);
    }

    pub fn null(&mut self) -> SchemaNodeId {
        self.create_node(SchemaNodeContent::Null)
    }

    pub fn boolean(&mut self) -> SchemaNodeId {
        self.create_node(SchemaNodeContent::Boolean)
    }

    pub fn int(&mut self) -> SchemaNodeId {
        self.create_node(SchemaNodeContent::Int)
    }

    pub fn long(&mut self) -> SchemaNodeId {
        self.create_node(SchemaNodeContent::Long)
    }

    pub fn float(&mut self) -> SchemaNodeId {
        self.create_node(SchemaNodeContent::Float)
    }

    pub fn double(&mut self) -> SchemaNodeId {
        self.create_node(SchemaNodeContent::Double)
    }

    pub fn string(&mut self) -> SchemaNodeId {
        self.create_node(SchemaNodeContent::String)
    }

    pub fn bytes(&mut self) -> SchemaNodeId {
        self.create_node(SchemaNodeContent::Bytes)
    }

    /// Create and register a fixed type.
    pub fn fixed(&mut self, name: impl Into<String>, size: usize) -> SchemaNodeId {
        let name = name.into();
        let id = self.create_node(SchemaNodeContent::Fixed(FixedSchema {
            name: name.clone(),
            size,
        }));
        self.register_type(name, id);
        id
    }

    /// Create and register an enum type.
    pub fn enumeration<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        symbols: impl IntoIterator<Item = S>,
    ) -> SchemaNodeId {
        let name = name.into();
        let id = self.create_node(SchemaNodeContent::Enum(EnumSchema {
            name: name.clone(),
            symbols: symbols.into_iter().map(Into::into).collect(),
        }));
        self.register_type(name, id);
        id
    }

    pub fn array(&mut self, items: SchemaNodeId) -> SchemaNodeId {
        self.create_node(SchemaNodeContent::Array(ArraySchema { items }))
    }

    pub fn map(&mut self, values: SchemaNodeId) -> SchemaNodeId {
        self.create_node(SchemaNodeContent::Map(MapSchema { values }))
    }

    /// Create and register a record type.
    pub fn record<S: Into<String>>(
        &mut self,
        name: impl Into<String>,
        fields: impl IntoIterator<Item = (S, SchemaNodeId)>,
    ) -> SchemaNodeId {
        let id = self.reserve();
        self.set_record(id, RecordKind::Record, name, fields);
        id
    }

    /// Fill a reserved slot with a record, error or request and register it.
    pub fn set_record<S: Into<String>>(
        &mut self,
        id: SchemaNodeId,
        kind: RecordKind,
        name: impl Into<String>,
        fields: impl IntoIterator<Item = (S, SchemaNodeId)>,
    ) {
        let name = name.into();
        let fields = fields
            .into_iter()
            .map(|(name, schema)| RecordField {
                name: name.into(),
                schema,
            })
            .collect();
        self.set(
            id,
            SchemaNodeContent::Record(RecordSchema {
                kind,
                name: name.clone(),
                fields,
            }),
        );
        self.register_type(name, id);
    }

    pub fn union(&mut self, branches: impl IntoIterator<Item = SchemaNodeId>) -> SchemaNodeId {
        self.create_node(SchemaNodeContent::Union(UnionSchema {
            branches: branches.into_iter().collect(),
        }))
    }

    /// Create a reference to a named type. The name does not need to be
    /// registered yet.
    pub fn reference(&mut self, name: impl Into<String>) -> SchemaNodeId {
        self.create_node(SchemaNodeContent::Reference(name.into()))
    }

    /// Consume the builder and produce the final schema document.
    pub fn finish(mut self, root: SchemaNodeId) -> SchemaDocument {
        self.doc.root = root;
        self.doc
    }
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaDocument {
    /// Build a single-node document for a primitive content.
    pub fn primitive(content: SchemaNodeContent) -> SchemaDocument {
        let mut builder = SchemaBuilder::new();
        let root = builder.create_node(content);
        builder.finish(root)
    }
}
