use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A caller-supplied node identifier.
///
/// Upstream producers are inconsistent about whether identifiers arrive as
/// strings or integers, sometimes within the same request. Both spellings of
/// the same logical node must compare equal, so all grouping and lookups go
/// through [`canonical`](Self::canonical) rather than the raw token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeRef {
    Number(i64),
    Text(String),
}

impl NodeRef {
    /// The canonical form: integer tokens (including string-encoded ones
    /// like `"0042"`) normalize to their decimal rendering, everything else
    /// passes through trimmed.
    pub fn canonical(&self) -> String {
        match self {
            NodeRef::Number(n) => n.to_string(),
            NodeRef::Text(s) => {
                let trimmed = s.trim();
                match trimmed.parse::<i64>() {
                    Ok(n) => n.to_string(),
                    Err(_) => trimmed.to_string(),
                }
            }
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::Number(n) => write!(f, "{}", n),
            NodeRef::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for NodeRef {
    fn from(s: &str) -> Self {
        NodeRef::Text(s.to_string())
    }
}

impl From<i64> for NodeRef {
    fn from(n: i64) -> Self {
        NodeRef::Number(n)
    }
}

impl From<i32> for NodeRef {
    fn from(n: i32) -> Self {
        NodeRef::Number(n as i64)
    }
}

/// A 2D canvas position in the consumer's editor coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single node as declared by the caller.
///
/// The property map is deliberately open (`serde_json::Value` values); the
/// normalizer is the only boundary where it is translated into the closed,
/// schema-shaped representation.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowNodeDefinition {
    #[serde(rename = "identifier")]
    pub id: NodeRef,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, serde_json::Value>,
    #[serde(default)]
    pub position: Option<Position>,
}

impl WorkflowNodeDefinition {
    pub fn new(id: impl Into<NodeRef>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            name: None,
            properties: IndexMap::new(),
            position: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.properties.insert(key.into(), value);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Some(Position::new(x, y));
        self
    }
}

/// A directed edge from one node's output port to another node's input port.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionDefinition {
    pub from_node: NodeRef,
    pub from_port: String,
    pub to_node: NodeRef,
    pub to_port: String,
}

impl ConnectionDefinition {
    pub fn new(
        from_node: impl Into<NodeRef>,
        from_port: impl Into<String>,
        to_node: impl Into<NodeRef>,
        to_port: impl Into<String>,
    ) -> Self {
        Self {
            from_node: from_node.into(),
            from_port: from_port.into(),
            to_node: to_node.into(),
            to_port: to_port.into(),
        }
    }
}

/// The complete caller-facing description of a terrain workflow, matching
/// the request shape produced by the front-end.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowDefinition {
    pub nodes: Vec<WorkflowNodeDefinition>,
    #[serde(default)]
    pub connections: Vec<ConnectionDefinition>,
}
