//! The graph compiler: orchestrates ID allocation, property normalization
//! and connection resolution into a [`CompiledGraph`].

use crate::error::{CompileError, CompileWarning};
use crate::graph::{CompiledGraph, CompiledNode, NodeId, ProjectConfig, ResolvedPort};
use crate::schema::{NodeTypeSchema, SchemaRegistry};
use crate::workflow::{Position, WorkflowDefinition};
use ahash::{AHashMap, AHashSet};
use indexmap::IndexMap;

pub mod alloc;
mod normalize;
mod resolve;

use alloc::{FoldedHashStrategy, IdAllocator, IdStrategy};
use normalize::PropertyNormalizer;
use resolve::ConnectionResolver;

/// Default canvas layout for nodes the caller did not position: left to
/// right in declaration order, matching how the consumer's editor reads a
/// document on first open.
const LAYOUT_ORIGIN_X: f64 = 24_000.0;
const LAYOUT_ORIGIN_Y: f64 = 26_000.0;
const LAYOUT_SPACING_X: f64 = 1_200.0;

/// A successful compile: the resolved graph plus every warning accumulated
/// along the way. Warnings never suppress the graph.
pub struct CompiledProject {
    pub graph: CompiledGraph,
    pub warnings: Vec<CompileWarning>,
}

pub struct Compiler {
    workflow: WorkflowDefinition,
    config: ProjectConfig,
    registry: SchemaRegistry,
    strategy: Box<dyn IdStrategy>,
}

pub struct CompilerBuilder {
    workflow: WorkflowDefinition,
    config: ProjectConfig,
    registry: SchemaRegistry,
    strategy: Option<Box<dyn IdStrategy>>,
}

impl CompilerBuilder {
    pub fn new(workflow: WorkflowDefinition, config: ProjectConfig) -> Self {
        Self {
            workflow,
            config,
            registry: SchemaRegistry::builtin(),
            strategy: None,
        }
    }

    /// Adds (or replaces) a node-type schema on top of the builtin catalog.
    pub fn with_node_schema(mut self, schema: NodeTypeSchema) -> Self {
        self.registry.register(schema);
        self
    }

    /// Replaces the whole registry, for callers with a fully custom catalog.
    pub fn with_registry(mut self, registry: SchemaRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Swaps the ID allocation scheme. The default is the deterministic
    /// folded-hash strategy seeded by the project name.
    pub fn with_id_strategy(mut self, strategy: Box<dyn IdStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn build(self) -> Compiler {
        let strategy = self
            .strategy
            .unwrap_or_else(|| Box::new(FoldedHashStrategy::new(&self.config.name)));
        Compiler {
            workflow: self.workflow,
            config: self.config,
            registry: self.registry,
            strategy,
        }
    }
}

impl Compiler {
    pub fn builder(workflow: WorkflowDefinition, config: ProjectConfig) -> CompilerBuilder {
        CompilerBuilder::new(workflow, config)
    }

    /// Compiles the workflow into a resolved project graph.
    ///
    /// Pipeline: duplicate-identifier check, ID allocation, property
    /// normalization, connection resolution, node assembly. The duplicate
    /// check runs strictly before any ID is allocated; node output order is
    /// the caller's declaration order.
    pub fn compile(self) -> Result<CompiledProject, CompileError> {
        let Compiler {
            workflow,
            config,
            registry,
            strategy,
        } = self;
        let mut warnings: Vec<CompileWarning> = Vec::new();

        // Canonical caller identifiers, in declaration order. Duplicates are
        // structural errors, caught before allocation has any side effects.
        let mut keys: Vec<String> = Vec::with_capacity(workflow.nodes.len());
        let mut seen: AHashSet<String> = AHashSet::with_capacity(workflow.nodes.len());
        for node in &workflow.nodes {
            let key = node.id.canonical();
            if !seen.insert(key.clone()) {
                return Err(CompileError::DuplicateNodeIdentifier { node_id: key });
            }
            keys.push(key);
        }

        let mut allocator = IdAllocator::new(strategy);
        let mut id_table: AHashMap<String, NodeId> = AHashMap::with_capacity(keys.len());
        let mut ids: Vec<NodeId> = Vec::with_capacity(keys.len());
        for (ordinal, key) in keys.iter().enumerate() {
            let id = allocator.allocate(ordinal as u32)?;
            tracing::debug!(node = %key, id, "allocated node id");
            id_table.insert(key.clone(), id);
            ids.push(id);
        }

        let normalizer = PropertyNormalizer::new(&registry);
        let mut types: AHashMap<NodeId, String> = AHashMap::with_capacity(keys.len());
        let mut normalized_props = Vec::with_capacity(workflow.nodes.len());
        for (node, key) in workflow.nodes.iter().zip(&keys) {
            let label = node.name.clone().unwrap_or_else(|| node.node_type.clone());
            let props =
                normalizer.normalize(key, &label, &node.node_type, &node.properties, &mut warnings)?;
            types.insert(id_table[key], node.node_type.clone());
            normalized_props.push(props);
        }

        let resolver = ConnectionResolver::new(&registry);
        let mut bindings = resolver.resolve(&id_table, &types, &workflow.connections)?;

        let mut nodes: IndexMap<NodeId, CompiledNode> =
            IndexMap::with_capacity(workflow.nodes.len());
        for (ordinal, ((node, id), properties)) in workflow
            .nodes
            .iter()
            .zip(&ids)
            .zip(normalized_props)
            .enumerate()
        {
            let schema = registry.require(&node.node_type, &keys[ordinal])?;

            let mut node_bindings = bindings.remove(id).unwrap_or_default();
            let ports = schema
                .ports
                .iter()
                .map(|spec| ResolvedPort {
                    name: spec.name.clone(),
                    direction: spec.direction,
                    cardinality: spec.cardinality,
                    records: node_bindings.remove(&spec.name).unwrap_or_default(),
                })
                .collect();

            let position = node.position.unwrap_or_else(|| {
                Position::new(
                    LAYOUT_ORIGIN_X + LAYOUT_SPACING_X * ordinal as f64,
                    LAYOUT_ORIGIN_Y,
                )
            });

            nodes.insert(
                *id,
                CompiledNode {
                    id: *id,
                    type_name: node.node_type.clone(),
                    display_name: node.name.clone().unwrap_or_else(|| node.node_type.clone()),
                    properties,
                    ports,
                    position,
                },
            );
        }

        for warning in &warnings {
            tracing::warn!(warning = %warning, "workflow compile warning");
        }
        tracing::debug!(
            nodes = nodes.len(),
            warnings = warnings.len(),
            project = %config.name,
            "compiled workflow graph"
        );

        Ok(CompiledProject {
            graph: CompiledGraph {
                nodes,
                project: config,
            },
            warnings,
        })
    }
}
