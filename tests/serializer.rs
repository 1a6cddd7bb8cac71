//! Tests for the document serializer: wire-format conventions, key order,
//! boolean encoding and byte-level determinism.
mod common;
use common::*;
use orogen::prelude::*;
use serde_json::{Value, json};

fn terrain_nodes(doc: &Value) -> &serde_json::Map<String, Value> {
    doc["Assets"]["$values"][0]["Terrain"]["Nodes"]
        .as_object()
        .expect("Nodes section should be an object")
}

#[test]
fn test_document_root_carries_identity_tag() {
    let compiled = compile(simple_workflow());
    let doc = DocumentSerializer::serialize(&compiled.graph);
    assert_eq!(doc["$id"], json!("1"));
    assert_eq!(doc["Assets"]["$id"], json!("2"));
}

#[test]
fn test_nodes_are_keyed_by_allocated_id() {
    let compiled = compile(simple_workflow());
    let doc = DocumentSerializer::serialize(&compiled.graph);
    let nodes = terrain_nodes(&doc);

    for node in compiled.graph.iter() {
        assert!(nodes.contains_key(&node.id.to_string()));
    }
}

#[test]
fn test_node_carries_assembly_qualified_type_tag() {
    let compiled = compile(simple_workflow());
    let doc = DocumentSerializer::serialize(&compiled.graph);
    let mountain = node_of_type(&compiled.graph, "Mountain");

    let entry = &terrain_nodes(&doc)[&mountain.id.to_string()];
    assert_eq!(
        entry["$type"],
        json!("QuadSpinner.Gaea.Nodes.Mountain, Gaea.Nodes")
    );
}

#[test]
fn test_node_keys_follow_schema_declaration_order() {
    let compiled = compile(simple_workflow());
    let doc = DocumentSerializer::serialize(&compiled.graph);
    let mountain = node_of_type(&compiled.graph, "Mountain");

    let entry = terrain_nodes(&doc)[&mountain.id.to_string()]
        .as_object()
        .unwrap();
    let keys: Vec<&str> = entry.keys().map(|k| k.as_str()).collect();
    assert_eq!(
        keys,
        [
            "$id", "$type", "Scale", "Height", "Style", "Bulk", "Seed", "Id", "Name",
            "Position", "Ports", "Modifiers"
        ]
    );
}

#[test]
fn test_booleans_serialize_as_json_literals() {
    let workflow = WorkflowDefinition {
        nodes: vec![WorkflowNodeDefinition::new("island", "Island")],
        connections: vec![],
    };
    let compiled = compile(workflow);
    let doc = DocumentSerializer::serialize(&compiled.graph);
    let island = node_of_type(&compiled.graph, "Island");

    let entry = &terrain_nodes(&doc)[&island.id.to_string()];
    assert_eq!(entry["Beaches"], Value::Bool(true));

    let rendered = DocumentSerializer::serialize_to_string(&compiled.graph).unwrap();
    assert!(rendered.contains("\"Beaches\": true"));
    assert!(!rendered.contains("\"Beaches\": 1"));
}

#[test]
fn test_ordered_sequences_are_wrapped_not_bare() {
    let compiled = compile(simple_workflow());
    let doc = DocumentSerializer::serialize(&compiled.graph);
    let erosion = node_of_type(&compiled.graph, "Erosion");

    let ports = &terrain_nodes(&doc)[&erosion.id.to_string()]["Ports"];
    assert!(ports.is_object(), "port lists must be wrapped objects");
    assert!(ports["$id"].is_string());
    assert!(ports["$values"].is_array());

    let assets = &doc["Assets"];
    assert!(assets.is_object());
    assert!(assets["$values"].is_array());
}

#[test]
fn test_bound_port_emits_peer_record() {
    let compiled = compile(simple_workflow());
    let doc = DocumentSerializer::serialize(&compiled.graph);
    let mountain = node_of_type(&compiled.graph, "Mountain");
    let erosion = node_of_type(&compiled.graph, "Erosion");

    let ports = terrain_nodes(&doc)[&erosion.id.to_string()]["Ports"]["$values"]
        .as_array()
        .unwrap();
    let in_port = ports
        .iter()
        .find(|p| p["Name"] == json!("In"))
        .expect("In port should be emitted");

    assert_eq!(in_port["Type"], json!("PrimaryIn, Required"));
    assert_eq!(in_port["Record"]["From"], json!(mountain.id));
    assert_eq!(in_port["Record"]["To"], json!(erosion.id));
    assert_eq!(in_port["Record"]["FromPort"], json!("Out"));
    assert_eq!(in_port["Record"]["ToPort"], json!("In"));
    assert_eq!(in_port["Record"]["IsValid"], Value::Bool(true));
}

#[test]
fn test_multi_cardinality_port_emits_wrapped_records() {
    let compiled = compile(mixer_workflow());
    let doc = DocumentSerializer::serialize(&compiled.graph);
    let mixer = node_of_type(&compiled.graph, "Mixer");
    let ridge = node_of_type(&compiled.graph, "Ridge");

    let ports = terrain_nodes(&doc)[&mixer.id.to_string()]["Ports"]["$values"]
        .as_array()
        .unwrap();
    let layers = ports
        .iter()
        .find(|p| p["Name"] == json!("Layers"))
        .expect("Layers port should be emitted");

    let records = layers["Records"]["$values"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["From"], json!(ridge.id));
}

#[test]
fn test_unbound_port_has_no_record() {
    let compiled = compile(simple_workflow());
    let doc = DocumentSerializer::serialize(&compiled.graph);
    let mountain = node_of_type(&compiled.graph, "Mountain");

    let ports = terrain_nodes(&doc)[&mountain.id.to_string()]["Ports"]["$values"]
        .as_array()
        .unwrap();
    let out_port = &ports[0];
    assert_eq!(out_port["Type"], json!("PrimaryOut"));
    assert!(out_port.get("Record").is_none());
    assert!(out_port.get("Records").is_none());
}

#[test]
fn test_serialization_is_byte_identical_across_runs() {
    let a = DocumentSerializer::serialize_to_string(&compile(simple_workflow()).graph).unwrap();
    let b = DocumentSerializer::serialize_to_string(&compile(simple_workflow()).graph).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_project_sections_reflect_config() {
    let mut config = ProjectConfig::new("Highlands");
    config.build.resolution = 2048;
    let compiled = Compiler::builder(simple_workflow(), config)
        .build()
        .compile()
        .unwrap();
    let doc = DocumentSerializer::serialize(&compiled.graph);

    assert_eq!(doc["Metadata"]["Name"], json!("Highlands"));
    assert_eq!(doc["BuildDefinition"]["Resolution"], json!(2048));
    assert_eq!(doc["Branches"], json!(1));
    assert!(doc["Id"].is_string());
}

#[test]
fn test_project_identifiers_depend_only_on_name() {
    let doc_for = |name: &str| {
        let compiled = Compiler::builder(simple_workflow(), ProjectConfig::new(name))
            .build()
            .compile()
            .unwrap();
        DocumentSerializer::serialize(&compiled.graph)
    };
    let a = doc_for("Alpha");
    let b = doc_for("Alpha");
    let c = doc_for("Beta");

    assert_eq!(a["Id"], b["Id"]);
    assert_ne!(a["Id"], c["Id"]);
}
