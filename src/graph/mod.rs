//! The in-memory representation of a fully compiled terrain project.
//!
//! Everything here is the output of a single compile call: ID-assigned,
//! property-normalized, connection-resolved, and never mutated afterwards
//! (the compiler replaces, it does not patch). Wire-format artifacts such as
//! identity tags and array wrappers never appear at this layer; they are a
//! serialization-only concern.

use crate::schema::{PortCardinality, PortDirection, PropertyValue};
use crate::workflow::Position;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Allocated project-unique node identifier. Non-sequential by design so the
/// document does not visually imply creation order.
pub type NodeId = u32;

/// A resolved inbound binding on a destination port: which node and output
/// port feed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRecord {
    pub from: NodeId,
    pub from_port: String,
    pub to: NodeId,
    pub to_port: String,
}

/// One port of a compiled node, in schema-declared order, carrying any
/// inbound peer references resolved from the connection set.
///
/// Output ports never carry records; single-cardinality inputs carry at most
/// one; multi-cardinality inputs keep all bindings in declaration order.
#[derive(Debug, Clone)]
pub struct ResolvedPort {
    pub name: String,
    pub direction: PortDirection,
    pub cardinality: PortCardinality,
    pub records: Vec<PortRecord>,
}

impl ResolvedPort {
    /// The single peer reference, for ports bound at most once.
    pub fn record(&self) -> Option<&PortRecord> {
        self.records.first()
    }

    pub fn is_bound(&self) -> bool {
        !self.records.is_empty()
    }
}

/// A single node after compilation.
#[derive(Debug, Clone)]
pub struct CompiledNode {
    pub id: NodeId,
    pub type_name: String,
    pub display_name: String,
    /// Exactly the schema's declared keys, in declared order, all legally
    /// typed.
    pub properties: IndexMap<String, PropertyValue>,
    pub ports: Vec<ResolvedPort>,
    pub position: Position,
}

impl CompiledNode {
    pub fn port(&self, name: &str) -> Option<&ResolvedPort> {
        self.ports.iter().find(|p| p.name == name)
    }
}

/// Build output settings carried into the project document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildOptions {
    pub destination: String,
    pub resolution: u32,
    pub bake_resolution: u32,
    pub tile_resolution: u32,
    pub edge_blending: f64,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            destination: "<Builds>\\[Filename]\\[+++]".to_string(),
            resolution: 1024,
            bake_resolution: 2048,
            tile_resolution: 1024,
            edge_blending: 0.25,
        }
    }
}

/// Project-level metadata supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub build: BuildOptions,
}

impl ProjectConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            build: BuildOptions::default(),
        }
    }
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

/// The fully resolved project graph, ready for serialization.
///
/// Node iteration order is the caller's declaration order; the consumer's
/// editor lays out nodes visually in document order on first open, so this
/// ordering is load-bearing, not cosmetic.
#[derive(Debug, Clone)]
pub struct CompiledGraph {
    pub nodes: IndexMap<NodeId, CompiledNode>,
    pub project: ProjectConfig,
}

impl CompiledGraph {
    pub fn node(&self, id: NodeId) -> Option<&CompiledNode> {
        self.nodes.get(&id)
    }

    /// Nodes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
