//! Tests for connection resolution: referential integrity, port legality,
//! cardinality policy and identifier canonicalization.
mod common;
use common::*;
use orogen::prelude::*;

#[test]
fn test_connection_produces_peer_reference() {
    let compiled = compile(simple_workflow());
    let mountain = node_of_type(&compiled.graph, "Mountain");
    let erosion = node_of_type(&compiled.graph, "Erosion");

    let port = erosion.port("In").expect("Erosion declares In");
    let record = port.record().expect("In should be bound");
    assert_eq!(record.from, mountain.id);
    assert_eq!(record.from_port, "Out");
    assert_eq!(record.to, erosion.id);
    assert_eq!(record.to_port, "In");
}

#[test]
fn test_unbound_ports_carry_no_records() {
    let compiled = compile(simple_workflow());
    let erosion = node_of_type(&compiled.graph, "Erosion");
    let out = erosion.port("Out").expect("Erosion declares Out");
    assert!(!out.is_bound());
}

#[test]
fn test_dangling_destination_fails() {
    let workflow = WorkflowDefinition {
        nodes: vec![WorkflowNodeDefinition::new("mountain", "Mountain")],
        connections: vec![ConnectionDefinition::new("mountain", "Out", "ghost", "In")],
    };
    let result = Compiler::builder(workflow, ProjectConfig::new("Testbed"))
        .build()
        .compile();
    match result {
        Err(CompileError::DanglingConnection {
            missing_node_id,
            port,
        }) => {
            assert_eq!(missing_node_id, "ghost");
            assert_eq!(port, "In");
        }
        other => panic!("expected DanglingConnection, got {:?}", other.err()),
    }
}

#[test]
fn test_unknown_port_fails() {
    let workflow = WorkflowDefinition {
        nodes: vec![
            WorkflowNodeDefinition::new("mountain", "Mountain"),
            WorkflowNodeDefinition::new("erosion", "Erosion"),
        ],
        connections: vec![ConnectionDefinition::new(
            "mountain", "Out", "erosion", "Sideways",
        )],
    };
    let result = Compiler::builder(workflow, ProjectConfig::new("Testbed"))
        .build()
        .compile();
    match result {
        Err(CompileError::UnknownPort { node_id, port, .. }) => {
            assert_eq!(node_id, "erosion");
            assert_eq!(port, "Sideways");
        }
        other => panic!("expected UnknownPort, got {:?}", other.err()),
    }
}

#[test]
fn test_port_with_wrong_direction_is_unknown() {
    // `Out` exists on Erosion, but as an output; a connection cannot land on it.
    let workflow = WorkflowDefinition {
        nodes: vec![
            WorkflowNodeDefinition::new("mountain", "Mountain"),
            WorkflowNodeDefinition::new("erosion", "Erosion"),
        ],
        connections: vec![ConnectionDefinition::new("mountain", "Out", "erosion", "Out")],
    };
    let result = Compiler::builder(workflow, ProjectConfig::new("Testbed"))
        .build()
        .compile();
    assert!(matches!(result, Err(CompileError::UnknownPort { .. })));
}

#[test]
fn test_string_and_integer_identifiers_compare_equal() {
    // The node is declared with the integer 7; the connection references "7".
    let workflow = WorkflowDefinition {
        nodes: vec![
            WorkflowNodeDefinition::new(7, "Mountain"),
            WorkflowNodeDefinition::new("erosion", "Erosion"),
        ],
        connections: vec![ConnectionDefinition::new("7", "Out", "erosion", "In")],
    };
    let compiled = compile(workflow);
    let mountain = node_of_type(&compiled.graph, "Mountain");
    let erosion = node_of_type(&compiled.graph, "Erosion");
    let record = erosion.port("In").unwrap().record().expect("In bound");
    assert_eq!(record.from, mountain.id);
}

#[test]
fn test_zero_padded_identifier_tokens_compare_equal() {
    let workflow = WorkflowDefinition {
        nodes: vec![
            WorkflowNodeDefinition::new("0042", "Mountain"),
            WorkflowNodeDefinition::new("erosion", "Erosion"),
        ],
        connections: vec![ConnectionDefinition::new(42, "Out", "erosion", "In")],
    };
    let compiled = compile(workflow);
    let erosion = node_of_type(&compiled.graph, "Erosion");
    assert!(erosion.port("In").unwrap().is_bound());
}

#[test]
fn test_single_cardinality_port_keeps_last_writer() {
    let workflow = WorkflowDefinition {
        nodes: vec![
            WorkflowNodeDefinition::new("first", "Mountain"),
            WorkflowNodeDefinition::new("second", "Ridge"),
            WorkflowNodeDefinition::new("erosion", "Erosion"),
        ],
        connections: vec![
            ConnectionDefinition::new("first", "Out", "erosion", "In"),
            ConnectionDefinition::new("second", "Out", "erosion", "In"),
        ],
    };
    let compiled = compile(workflow);
    let ridge = node_of_type(&compiled.graph, "Ridge");
    let erosion = node_of_type(&compiled.graph, "Erosion");

    let port = erosion.port("In").unwrap();
    assert_eq!(port.records.len(), 1);
    assert_eq!(port.record().unwrap().from, ridge.id);
}

#[test]
fn test_multi_cardinality_port_keeps_declaration_order() {
    let compiled = compile(mixer_workflow());
    let ridge = node_of_type(&compiled.graph, "Ridge");
    let constant = node_of_type(&compiled.graph, "Constant");
    let mixer = node_of_type(&compiled.graph, "Mixer");

    let layers = mixer.port("Layers").unwrap();
    assert_eq!(layers.records.len(), 2);
    assert_eq!(layers.records[0].from, ridge.id);
    assert_eq!(layers.records[1].from, constant.id);
}
