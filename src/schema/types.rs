use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The value kind a node property is declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Float,
    Integer,
    Bool,
    /// One of a fixed set of named choices.
    Choice,
    /// Free-form text, e.g. an export filename.
    Text,
}

impl ValueKind {
    /// Human-readable kind name used in warning messages.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Float => "a number",
            ValueKind::Integer => "an integer",
            ValueKind::Bool => "a boolean",
            ValueKind::Choice => "a choice",
            ValueKind::Text => "text",
        }
    }
}

/// A normalized property value, closed over the kinds the consumer's save
/// format can represent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Float(f64),
    Integer(i64),
    Bool(bool),
    Text(String),
}

impl PropertyValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            PropertyValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            PropertyValue::Float(f) => serde_json::json!(f),
            PropertyValue::Integer(i) => serde_json::json!(i),
            PropertyValue::Bool(b) => serde_json::Value::Bool(*b),
            PropertyValue::Text(s) => serde_json::Value::String(s.clone()),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Float(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Legal-value constraint attached to a property declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    None,
    /// Numeric range; out-of-range caller values are clamped, not rejected.
    Range { min: f64, max: f64 },
    /// Closed set of legal choice names, in canonical casing.
    OneOf(Vec<String>),
}

/// A single property declaration on a node type.
#[derive(Debug, Clone)]
pub struct PropertySpec {
    /// Canonical name, as emitted in the project document.
    pub name: String,
    /// Additional caller-facing spellings beyond case variants of `name`.
    pub aliases: Vec<String>,
    pub kind: ValueKind,
    pub default: PropertyValue,
    pub constraint: Constraint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortCardinality {
    /// At most one inbound binding; a later binding supersedes an earlier one.
    Single,
    /// Any number of inbound bindings, kept in declaration order.
    Multi,
}

/// A declared attachment point on a node type.
#[derive(Debug, Clone)]
pub struct PortSpec {
    pub name: String,
    pub direction: PortDirection,
    pub cardinality: PortCardinality,
}

/// The immutable schema for one node type: its declared properties in
/// canonical order and its declared ports.
///
/// Schemas are data, not behavior. They are assembled once by the catalog
/// (or by a caller extending the registry) and consulted by the normalizer,
/// the resolver and the serializer; no other component may hardcode
/// per-type property lists.
#[derive(Debug, Clone)]
pub struct NodeTypeSchema {
    pub type_name: String,
    pub properties: Vec<PropertySpec>,
    pub ports: Vec<PortSpec>,
}

impl NodeTypeSchema {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            properties: Vec::new(),
            ports: Vec::new(),
        }
    }

    pub fn float(mut self, name: &str, default: f64, min: f64, max: f64) -> Self {
        self.properties.push(PropertySpec {
            name: name.to_string(),
            aliases: Vec::new(),
            kind: ValueKind::Float,
            default: PropertyValue::Float(default),
            constraint: Constraint::Range { min, max },
        });
        self
    }

    pub fn integer(mut self, name: &str, default: i64, min: i64, max: i64) -> Self {
        self.properties.push(PropertySpec {
            name: name.to_string(),
            aliases: Vec::new(),
            kind: ValueKind::Integer,
            default: PropertyValue::Integer(default),
            constraint: Constraint::Range {
                min: min as f64,
                max: max as f64,
            },
        });
        self
    }

    pub fn boolean(mut self, name: &str, default: bool) -> Self {
        self.properties.push(PropertySpec {
            name: name.to_string(),
            aliases: Vec::new(),
            kind: ValueKind::Bool,
            default: PropertyValue::Bool(default),
            constraint: Constraint::None,
        });
        self
    }

    pub fn choice(mut self, name: &str, default: &str, choices: &[&str]) -> Self {
        self.properties.push(PropertySpec {
            name: name.to_string(),
            aliases: Vec::new(),
            kind: ValueKind::Choice,
            default: PropertyValue::Text(default.to_string()),
            constraint: Constraint::OneOf(choices.iter().map(|c| c.to_string()).collect()),
        });
        self
    }

    pub fn text(mut self, name: &str, default: &str) -> Self {
        self.properties.push(PropertySpec {
            name: name.to_string(),
            aliases: Vec::new(),
            kind: ValueKind::Text,
            default: PropertyValue::Text(default.to_string()),
            constraint: Constraint::None,
        });
        self
    }

    /// Attaches an extra caller-facing alias to the most recently declared
    /// property.
    pub fn aliased(mut self, alias: &str) -> Self {
        if let Some(prop) = self.properties.last_mut() {
            prop.aliases.push(alias.to_string());
        }
        self
    }

    pub fn input(mut self, name: &str) -> Self {
        self.ports.push(PortSpec {
            name: name.to_string(),
            direction: PortDirection::Input,
            cardinality: PortCardinality::Single,
        });
        self
    }

    pub fn input_multi(mut self, name: &str) -> Self {
        self.ports.push(PortSpec {
            name: name.to_string(),
            direction: PortDirection::Input,
            cardinality: PortCardinality::Multi,
        });
        self
    }

    pub fn output(mut self, name: &str) -> Self {
        self.ports.push(PortSpec {
            name: name.to_string(),
            direction: PortDirection::Output,
            cardinality: PortCardinality::Multi,
        });
        self
    }

    pub fn property(&self, name: &str) -> Option<&PropertySpec> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn port(&self, name: &str) -> Option<&PortSpec> {
        self.ports.iter().find(|p| p.name == name)
    }

    /// All declared properties at their schema defaults, in declared order.
    pub fn default_properties(&self) -> IndexMap<String, PropertyValue> {
        self.properties
            .iter()
            .map(|p| (p.name.clone(), p.default.clone()))
            .collect()
    }
}
