//! Walks a [`CompiledGraph`] and emits the terrain application's save-file
//! document.
//!
//! Everything peculiar to the wire format lives here: identity tags, type
//! tags, wrapped arrays, per-type key order and literal boolean encoding.
//! The in-memory graph never carries any of these artifacts. Serialization
//! is a pure function of the graph; the same graph always produces the same
//! bytes, which the regression fixtures compare against directly.

use crate::graph::{CompiledGraph, CompiledNode, PortRecord, ResolvedPort};
use crate::schema::{PortCardinality, PortDirection};
use serde_json::{Value, json};
use std::hash::BuildHasher;

use super::writer::{K_TYPE, K_VALUES, RefWriter};

/// Assembly-qualified type tag the consumer's deserializer resolves node
/// objects with.
const NODE_TYPE_NAMESPACE: &str = "QuadSpinner.Gaea.Nodes";
const NODE_TYPE_ASSEMBLY: &str = "Gaea.Nodes";

/// Save-format version stamped into the document metadata.
const DOCUMENT_VERSION: &str = "1.3.2.7";

pub struct DocumentSerializer;

impl DocumentSerializer {
    /// Emits the full project document for `graph`.
    ///
    /// Identity tags are assigned strictly in emission order, enclosing
    /// object before contents, exactly as the consumer's own serializer
    /// numbers them.
    pub fn serialize(graph: &CompiledGraph) -> Value {
        let mut w = RefWriter::new();
        let mut root = w.object();

        let mut assets = w.object();
        let mut asset = w.object();
        asset.insert("Terrain".to_string(), Self::terrain_section(&mut w, graph));
        assets.insert(
            K_VALUES.to_string(),
            Value::Array(vec![Value::Object(asset)]),
        );
        root.insert("Assets".to_string(), Value::Object(assets));

        root.insert(
            "Id".to_string(),
            Value::String(project_guid(&graph.project.name, 0x01)),
        );
        root.insert("Branches".to_string(), json!(1));
        root.insert(
            "BuildDefinition".to_string(),
            Self::build_definition(&mut w, graph),
        );
        root.insert("State".to_string(), Self::state_section(&mut w, graph));
        root.insert(
            "Metadata".to_string(),
            Self::metadata_section(&mut w, graph),
        );

        Value::Object(root)
    }

    /// The canonical string rendering used for byte-level regression
    /// comparison.
    pub fn serialize_to_string(graph: &CompiledGraph) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::serialize(graph))
    }

    fn terrain_section(w: &mut RefWriter, graph: &CompiledGraph) -> Value {
        let mut terrain = w.object();
        terrain.insert(
            "Id".to_string(),
            Value::String(project_guid(&graph.project.name, 0x02)),
        );

        let mut nodes = w.object();
        for node in graph.iter() {
            nodes.insert(node.id.to_string(), Self::node_object(w, node));
        }
        terrain.insert("Nodes".to_string(), Value::Object(nodes));

        terrain.insert("Groups".to_string(), w.wrap_values(Vec::new()));
        terrain.insert("Notes".to_string(), w.wrap_values(Vec::new()));

        let mut tabs = w.object();
        let mut tab = w.object();
        tab.insert("Name".to_string(), Value::String("Graph 1".to_string()));
        tab.insert("Color".to_string(), Value::String("Brass".to_string()));
        tab.insert("ZoomFactor".to_string(), json!(0.5));
        tabs.insert(
            K_VALUES.to_string(),
            Value::Array(vec![Value::Object(tab)]),
        );
        terrain.insert("GraphTabs".to_string(), Value::Object(tabs));

        Value::Object(terrain)
    }

    /// One node object: identity tag, type tag, properties in
    /// schema-declared order, then the structural fields the consumer
    /// expects in this exact order.
    fn node_object(w: &mut RefWriter, node: &CompiledNode) -> Value {
        let mut obj = w.object();
        obj.insert(
            K_TYPE.to_string(),
            Value::String(format!(
                "{}.{}, {}",
                NODE_TYPE_NAMESPACE, node.type_name, NODE_TYPE_ASSEMBLY
            )),
        );

        for (name, value) in &node.properties {
            obj.insert(name.clone(), value.to_json());
        }

        obj.insert("Id".to_string(), json!(node.id));
        obj.insert("Name".to_string(), Value::String(node.display_name.clone()));

        let mut position = w.object();
        position.insert("X".to_string(), json!(node.position.x));
        position.insert("Y".to_string(), json!(node.position.y));
        obj.insert("Position".to_string(), Value::Object(position));

        let mut ports = w.object();
        let mut port_values = Vec::with_capacity(node.ports.len());
        let mut first_in = true;
        let mut first_out = true;
        for port in &node.ports {
            let first = match port.direction {
                PortDirection::Input => std::mem::replace(&mut first_in, false),
                PortDirection::Output => std::mem::replace(&mut first_out, false),
            };
            port_values.push(Self::port_object(w, port, first));
        }
        ports.insert(K_VALUES.to_string(), Value::Array(port_values));
        obj.insert("Ports".to_string(), Value::Object(ports));

        obj.insert("Modifiers".to_string(), w.wrap_values(Vec::new()));

        Value::Object(obj)
    }

    fn port_object(w: &mut RefWriter, port: &ResolvedPort, first_of_direction: bool) -> Value {
        let mut obj = w.object();
        obj.insert("Name".to_string(), Value::String(port.name.clone()));
        let type_label = match (port.direction, first_of_direction) {
            (PortDirection::Input, true) => "PrimaryIn, Required",
            (PortDirection::Input, false) => "In",
            (PortDirection::Output, true) => "PrimaryOut",
            (PortDirection::Output, false) => "Out",
        };
        obj.insert("Type".to_string(), Value::String(type_label.to_string()));

        if !port.records.is_empty() {
            match port.cardinality {
                PortCardinality::Single => {
                    let record = Self::record_object(w, &port.records[0]);
                    obj.insert("Record".to_string(), record);
                }
                PortCardinality::Multi => {
                    let mut records = w.object();
                    let values: Vec<Value> = port
                        .records
                        .iter()
                        .map(|record| Self::record_object(w, record))
                        .collect();
                    records.insert(K_VALUES.to_string(), Value::Array(values));
                    obj.insert("Records".to_string(), Value::Object(records));
                }
            }
        }

        Value::Object(obj)
    }

    fn record_object(w: &mut RefWriter, record: &PortRecord) -> Value {
        let mut rec = w.object();
        rec.insert("From".to_string(), json!(record.from));
        rec.insert("To".to_string(), json!(record.to));
        rec.insert(
            "FromPort".to_string(),
            Value::String(record.from_port.clone()),
        );
        rec.insert("ToPort".to_string(), Value::String(record.to_port.clone()));
        rec.insert("IsValid".to_string(), Value::Bool(true));
        Value::Object(rec)
    }

    fn build_definition(w: &mut RefWriter, graph: &CompiledGraph) -> Value {
        let build = &graph.project.build;
        let mut obj = w.object();
        obj.insert(
            "Destination".to_string(),
            Value::String(build.destination.clone()),
        );
        obj.insert("Resolution".to_string(), json!(build.resolution));
        obj.insert("BakeResolution".to_string(), json!(build.bake_resolution));
        obj.insert("TileResolution".to_string(), json!(build.tile_resolution));
        obj.insert("EdgeBlending".to_string(), json!(build.edge_blending));
        Value::Object(obj)
    }

    fn state_section(w: &mut RefWriter, graph: &CompiledGraph) -> Value {
        let mut obj = w.object();
        let selected = graph.iter().last().map(|n| n.id).unwrap_or_default();
        obj.insert("SelectedNode".to_string(), json!(selected));
        obj.insert("NodeBookmarks".to_string(), w.wrap_values(Vec::new()));

        let mut viewport = w.object();
        viewport.insert("X".to_string(), json!(24_000.0));
        viewport.insert("Y".to_string(), json!(26_000.0));
        viewport.insert("Zoom".to_string(), json!(0.5));
        obj.insert("Viewport".to_string(), Value::Object(viewport));

        Value::Object(obj)
    }

    fn metadata_section(w: &mut RefWriter, graph: &CompiledGraph) -> Value {
        let project = &graph.project;
        let mut obj = w.object();
        obj.insert("Name".to_string(), Value::String(project.name.clone()));
        obj.insert(
            "Description".to_string(),
            Value::String(project.description.clone()),
        );
        obj.insert(
            "Version".to_string(),
            Value::String(DOCUMENT_VERSION.to_string()),
        );
        obj.insert("Owner".to_string(), Value::String(String::new()));
        obj.insert("DateCreated".to_string(), Value::String(String::new()));
        obj.insert("DateLastBuilt".to_string(), Value::String(String::new()));
        obj.insert("DateLastSaved".to_string(), Value::String(String::new()));
        Value::Object(obj)
    }
}

/// GUID-shaped identifier derived from the project name alone, so documents
/// never depend on the clock or process randomness.
fn project_guid(name: &str, salt: u64) -> String {
    let hasher = ahash::RandomState::with_seeds(0x6f726f67, 0x656e5f64, 0x6f635f69, 0x64730000);
    let hi = hasher.hash_one((name, salt, 0u8));
    let lo = hasher.hash_one((name, salt, 1u8));
    format!(
        "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
        (hi >> 32) as u32,
        (hi >> 16) as u16,
        hi as u16,
        (lo >> 48) as u16,
        lo & 0xffff_ffff_ffff
    )
}
