//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the orogen crate so callers
//! can bring the whole compile-and-serialize surface into scope with one
//! `use`.

// Core compilation and serialization
pub use crate::compiler::{CompiledProject, Compiler, CompilerBuilder};
pub use crate::document::DocumentSerializer;

// ID allocation strategies
pub use crate::compiler::alloc::{FoldedHashStrategy, IdStrategy, SeededRandomStrategy};

// Compiled graph model
pub use crate::graph::{
    BuildOptions, CompiledGraph, CompiledNode, NodeId, PortRecord, ProjectConfig, ResolvedPort,
};

// Schema types
pub use crate::schema::{
    Constraint, NodeTypeSchema, PortCardinality, PortDirection, PropertyValue, SchemaRegistry,
    ValueKind,
};

// Caller-facing workflow model
pub use crate::workflow::{
    ConnectionDefinition, IntoWorkflow, NodeRef, Position, WorkflowDefinition,
    WorkflowNodeDefinition,
};

// Error and warning types
pub use crate::error::{CompileError, CompileWarning, WorkflowConversionError};
