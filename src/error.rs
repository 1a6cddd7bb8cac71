use thiserror::Error;

/// Errors that can occur while compiling a workflow into a terrain project graph.
///
/// All of these are terminal for the compile call that produced them: the
/// compiler returns no document, only the structured error identifying the
/// offending node or connection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Node '{node_id}' has an unregistered node type: '{type_name}'")]
    UnknownNodeType { node_id: String, type_name: String },

    #[error("Node '{node_id}' ({type_name}) declares no port named '{port}'")]
    UnknownPort {
        node_id: String,
        type_name: String,
        port: String,
    },

    #[error(
        "Connection on port '{port}' references node '{missing_node_id}', which is not part of the workflow"
    )]
    DanglingConnection {
        missing_node_id: String,
        port: String,
    },

    #[error("Two workflow nodes share the identifier '{node_id}'")]
    DuplicateNodeIdentifier { node_id: String },

    #[error("Could not allocate a unique node ID after {attempts} attempts")]
    IdSpaceExhausted { attempts: u32 },
}

/// Errors that can occur when converting a custom caller format into a
/// [`WorkflowDefinition`](crate::workflow::WorkflowDefinition).
#[derive(Error, Debug, Clone)]
pub enum WorkflowConversionError {
    #[error("Invalid workflow data: {0}")]
    ValidationError(String),
}

/// Non-terminal defects noticed during property normalization.
///
/// Warnings accumulate alongside a successful compile and never suppress the
/// document; the distinction from [`CompileError`] is "malformed but
/// repairable" versus "structurally impossible" input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileWarning {
    #[error(
        "Node '{node}': property '{property}' value {supplied} is outside [{min}, {max}], clamped to {clamped}"
    )]
    PropertyClamped {
        node: String,
        property: String,
        supplied: f64,
        min: f64,
        max: f64,
        clamped: f64,
    },

    #[error("Node '{node}': property '{property}' is not declared for this node type, dropped")]
    PropertyDropped { node: String, property: String },

    #[error(
        "Node '{node}': property '{property}' received both '{winner}' and '{ignored}', keeping '{winner}'"
    )]
    AliasCollision {
        node: String,
        property: String,
        winner: String,
        ignored: String,
    },

    #[error(
        "Node '{node}': '{supplied}' is not a legal choice for property '{property}', using the default"
    )]
    InvalidChoice {
        node: String,
        property: String,
        supplied: String,
    },

    #[error(
        "Node '{node}': property '{property}' value could not be read as {expected}, using the default"
    )]
    UncoercibleValue {
        node: String,
        property: String,
        expected: &'static str,
    },
}
