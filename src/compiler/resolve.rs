//! Connection resolution: referential-integrity checks and per-destination
//! grouping of the caller's connection list.

use crate::error::CompileError;
use crate::graph::{NodeId, PortRecord};
use crate::schema::{PortCardinality, PortDirection, SchemaRegistry};
use crate::workflow::ConnectionDefinition;
use ahash::AHashMap;

/// Resolved inbound bindings, grouped by destination node then port name.
pub(crate) type PortBindings = AHashMap<NodeId, AHashMap<String, Vec<PortRecord>>>;

pub(crate) struct ConnectionResolver<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> ConnectionResolver<'a> {
    pub(crate) fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Groups `connections` per destination node and port, verifying that
    /// every endpoint names a known node and a port that node's schema
    /// actually declares, with the right direction.
    ///
    /// `id_table` maps canonical caller identifiers to allocated IDs (the
    /// canonicalization makes `7` and `"7"` the same node); `types` maps
    /// allocated IDs back to node type names. Single-cardinality ports keep
    /// only the last binding declared for them; multi-cardinality ports keep
    /// every binding in declaration order.
    pub(crate) fn resolve(
        &self,
        id_table: &AHashMap<String, NodeId>,
        types: &AHashMap<NodeId, String>,
        connections: &[ConnectionDefinition],
    ) -> Result<PortBindings, CompileError> {
        let mut bindings: PortBindings = AHashMap::new();

        for conn in connections {
            let from_key = conn.from_node.canonical();
            let to_key = conn.to_node.canonical();

            let from_id = *id_table.get(&from_key).ok_or_else(|| {
                CompileError::DanglingConnection {
                    missing_node_id: from_key.clone(),
                    port: conn.from_port.clone(),
                }
            })?;
            let to_id =
                *id_table
                    .get(&to_key)
                    .ok_or_else(|| CompileError::DanglingConnection {
                        missing_node_id: to_key.clone(),
                        port: conn.to_port.clone(),
                    })?;

            self.check_port(&from_key, &types[&from_id], &conn.from_port, PortDirection::Output)?;
            let cardinality =
                self.check_port(&to_key, &types[&to_id], &conn.to_port, PortDirection::Input)?;

            let record = PortRecord {
                from: from_id,
                from_port: conn.from_port.clone(),
                to: to_id,
                to_port: conn.to_port.clone(),
            };

            let slot = bindings
                .entry(to_id)
                .or_default()
                .entry(conn.to_port.clone())
                .or_default();
            match cardinality {
                // Deliberate last-write-wins, mirroring historical producer
                // behavior for conflicting single-port declarations.
                PortCardinality::Single => {
                    slot.clear();
                    slot.push(record);
                }
                PortCardinality::Multi => slot.push(record),
            }
        }

        Ok(bindings)
    }

    /// A port that exists but faces the wrong way is as unusable as one that
    /// does not exist, so both report as `UnknownPort`.
    fn check_port(
        &self,
        node_key: &str,
        type_name: &str,
        port: &str,
        direction: PortDirection,
    ) -> Result<PortCardinality, CompileError> {
        let schema = self.registry.require(type_name, node_key)?;
        match schema.port(port) {
            Some(spec) if spec.direction == direction => Ok(spec.cardinality),
            _ => Err(CompileError::UnknownPort {
                node_id: node_key.to_string(),
                type_name: type_name.to_string(),
                port: port.to_string(),
            }),
        }
    }
}
