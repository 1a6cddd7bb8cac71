//! Common test utilities for building workflow definitions.
use orogen::prelude::*;
use serde_json::json;

/// Creates the canonical two-node workflow: a `Mountain` with no supplied
/// properties feeding an `Erosion` with `{"strength": 0.7}`.
#[allow(dead_code)]
pub fn simple_workflow() -> WorkflowDefinition {
    WorkflowDefinition {
        nodes: vec![
            WorkflowNodeDefinition::new("mountain", "Mountain"),
            WorkflowNodeDefinition::new("erosion", "Erosion")
                .with_property("strength", json!(0.7)),
        ],
        connections: vec![ConnectionDefinition::new("mountain", "Out", "erosion", "In")],
    }
}

/// A workflow exercising the format-alias rule: both case variants of the
/// `Export` node's `Format` property are supplied.
#[allow(dead_code)]
pub fn conflicting_format_workflow() -> WorkflowDefinition {
    WorkflowDefinition {
        nodes: vec![
            WorkflowNodeDefinition::new("mountain", "Mountain"),
            WorkflowNodeDefinition::new("export", "Export")
                .with_property("Format", json!("PNG"))
                .with_property("format", json!("TIFF")),
        ],
        connections: vec![ConnectionDefinition::new("mountain", "Out", "export", "In")],
    }
}

/// Three generators feeding a `Mixer`: one on the primary input and two on
/// the multi-cardinality `Layers` port, in declaration order.
#[allow(dead_code)]
pub fn mixer_workflow() -> WorkflowDefinition {
    WorkflowDefinition {
        nodes: vec![
            WorkflowNodeDefinition::new("base", "Mountain"),
            WorkflowNodeDefinition::new("layer_a", "Ridge"),
            WorkflowNodeDefinition::new("layer_b", "Constant"),
            WorkflowNodeDefinition::new("mix", "Mixer"),
        ],
        connections: vec![
            ConnectionDefinition::new("base", "Out", "mix", "In"),
            ConnectionDefinition::new("layer_a", "Out", "mix", "Layers"),
            ConnectionDefinition::new("layer_b", "Out", "mix", "Layers"),
        ],
    }
}

/// Compiles `workflow` under a fixed project name with the default builder.
#[allow(dead_code)]
pub fn compile(workflow: WorkflowDefinition) -> CompiledProject {
    Compiler::builder(workflow, ProjectConfig::new("Testbed"))
        .build()
        .compile()
        .expect("workflow should compile")
}

/// Finds the compiled node of the given type, panicking if absent.
#[allow(dead_code)]
pub fn node_of_type<'g>(graph: &'g CompiledGraph, type_name: &str) -> &'g CompiledNode {
    graph
        .iter()
        .find(|n| n.type_name == type_name)
        .unwrap_or_else(|| panic!("no {} node in graph", type_name))
}
