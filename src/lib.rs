//! # Orogen - Terrain Workflow Graph Compiler
//!
//! **Orogen** compiles abstract descriptions of procedural-terrain workflows
//! (typed nodes plus directed connections between their ports) into the
//! fully-formed project documents an external terrain-authoring application
//! loads without error. Three pressures drive the design: per-node-type
//! schema correctness, graph-wiring correctness, and byte-level fidelity to
//! the consumer's save format (field presence, field order, literal boolean
//! encoding, and the identity-tag/array-wrapper convention used throughout
//! the document).
//!
//! ## Core Workflow
//!
//! 1.  **Describe**: Build a [`WorkflowDefinition`](workflow::WorkflowDefinition)
//!     — either directly, by deserializing the front-end's JSON request
//!     shape, or by implementing [`IntoWorkflow`](workflow::IntoWorkflow)
//!     for your own format.
//! 2.  **Compile**: Use [`Compiler::builder`](compiler::Compiler::builder)
//!     to create a compiler, optionally extending the node catalog or
//!     swapping the ID allocation strategy, then call `compile()`. The
//!     compiler assigns project-unique non-sequential IDs, normalizes every
//!     property against its node-type schema, and resolves every connection.
//! 3.  **Serialize**: Hand the compiled graph to
//!     [`DocumentSerializer`](document::DocumentSerializer) to emit the
//!     consumer's document. Identical input always yields byte-identical
//!     output.
//!
//! Malformed-but-repairable input (out-of-range values, unknown property
//! keys, duplicate alias spellings) degrades gracefully into warnings;
//! structurally impossible input (unknown node types or ports, dangling
//! connections, duplicate identifiers) fails the whole compile with a
//! structured error and no document.
//!
//! ## Quick Start
//!
//! ```rust
//! use orogen::prelude::*;
//!
//! fn main() -> Result<(), CompileError> {
//!     let workflow = WorkflowDefinition {
//!         nodes: vec![
//!             WorkflowNodeDefinition::new("mountain", "Mountain"),
//!             WorkflowNodeDefinition::new("erosion", "Erosion")
//!                 .with_property("Strength", serde_json::json!(0.7)),
//!             WorkflowNodeDefinition::new("export", "Export")
//!                 .with_property("Format", serde_json::json!("TIFF")),
//!         ],
//!         connections: vec![
//!             ConnectionDefinition::new("mountain", "Out", "erosion", "In"),
//!             ConnectionDefinition::new("erosion", "Out", "export", "In"),
//!         ],
//!     };
//!
//!     let compiled = Compiler::builder(workflow, ProjectConfig::new("Alpine"))
//!         .build()
//!         .compile()?;
//!
//!     for warning in &compiled.warnings {
//!         eprintln!("warning: {}", warning);
//!     }
//!
//!     let document = DocumentSerializer::serialize(&compiled.graph);
//!     assert!(document.get("Assets").is_some());
//!     Ok(())
//! }
//! ```

pub mod compiler;
pub mod document;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod schema;
pub mod workflow;
