use super::catalog::register_builtin_schemas;
use super::types::{NodeTypeSchema, PropertyValue};
use crate::error::CompileError;
use ahash::AHashMap;
use indexmap::IndexMap;

/// The single source of truth for node-type schemas.
///
/// Built once per compiler (cheaply, from the builtin catalog), optionally
/// extended with caller schemas before the compiler is built, and read-only
/// afterwards. Safe for unsynchronized concurrent reads.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: AHashMap<String, NodeTypeSchema>,
}

impl SchemaRegistry {
    /// A registry pre-populated with the builtin node catalog.
    pub fn builtin() -> Self {
        let mut schemas = AHashMap::new();
        register_builtin_schemas(&mut schemas);
        Self { schemas }
    }

    /// An empty registry, for callers that supply their own catalog.
    pub fn empty() -> Self {
        Self {
            schemas: AHashMap::new(),
        }
    }

    /// Adds or replaces a schema. Intended for use before compilation starts;
    /// the compiler never mutates its registry.
    pub fn register(&mut self, schema: NodeTypeSchema) {
        self.schemas.insert(schema.type_name.clone(), schema);
    }

    pub fn lookup(&self, type_name: &str) -> Option<&NodeTypeSchema> {
        self.schemas.get(type_name)
    }

    /// Like [`lookup`](Self::lookup), but produces the compile error for the
    /// node that referenced the missing type.
    pub fn require(&self, type_name: &str, node_id: &str) -> Result<&NodeTypeSchema, CompileError> {
        self.lookup(type_name)
            .ok_or_else(|| CompileError::UnknownNodeType {
                node_id: node_id.to_string(),
                type_name: type_name.to_string(),
            })
    }

    pub fn is_valid_property(&self, type_name: &str, property_name: &str) -> bool {
        self.lookup(type_name)
            .is_some_and(|s| s.property(property_name).is_some())
    }

    /// The full default property map for a type, in declared order.
    pub fn default_properties(&self, type_name: &str) -> Option<IndexMap<String, PropertyValue>> {
        self.lookup(type_name).map(|s| s.default_properties())
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.schemas.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
