// SPDX-License-Identifier: MIT OR Apache-2.0
//! Flow graph snapshot: the canonical node mapping and its integrity rules.

use crate::node::{Node, NodeId};
use crate::port::PortDirection;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mapping from node id to node record.
///
/// Key uniqueness is the only structural invariant; insertion order is kept
/// for stable output but carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowGraph {
    nodes: IndexMap<NodeId, Node>,
}

impl FlowGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node under its own id, replacing any previous entry.
    pub fn insert(&mut self, node: Node) -> Option<Node> {
        self.nodes.insert(node.id.clone(), node)
    }

    /// Remove a node. Edges held by other nodes are left untouched.
    pub fn remove(&mut self, id: &NodeId) -> Option<Node> {
        self.nodes.swap_remove(id)
    }

    /// Get a node by id.
    pub fn get(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get a mutable node by id.
    pub fn get_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate mutably over all nodes.
    pub(crate) fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.values_mut()
    }

    /// Iterate over all node ids.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// Iterate over `(id, node)` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Node)> {
        self.nodes.iter()
    }

    /// Connections that reference a node or port absent from this graph.
    pub fn dangling_connections(&self) -> Vec<DanglingConnection> {
        let mut dangling = Vec::new();
        for (id, node) in &self.nodes {
            for (port, output) in &node.outputs {
                for conn in &output.connections {
                    let resolves = self.get(&conn.node).is_some_and(|n| n.has_input(&conn.port));
                    if !resolves {
                        dangling.push(DanglingConnection {
                            node: id.clone(),
                            port: port.clone(),
                            direction: PortDirection::Output,
                            target: conn.node.clone(),
                            target_port: conn.port.clone(),
                        });
                    }
                }
            }
            for (port, input) in &node.inputs {
                for conn in &input.connections {
                    let resolves = self.get(&conn.node).is_some_and(|n| n.has_output(&conn.port));
                    if !resolves {
                        dangling.push(DanglingConnection {
                            node: id.clone(),
                            port: port.clone(),
                            direction: PortDirection::Input,
                            target: conn.node.clone(),
                            target_port: conn.port.clone(),
                        });
                    }
                }
            }
        }
        dangling
    }

    /// Drop every dangling connection, returning what was removed.
    pub fn prune_dangling(&mut self) -> Vec<DanglingConnection> {
        let dangling = self.dangling_connections();
        for broken in &dangling {
            let Some(node) = self.nodes.get_mut(&broken.node) else {
                continue;
            };
            match broken.direction {
                PortDirection::Output => {
                    if let Some(port) = node.outputs.get_mut(&broken.port) {
                        port.connections
                            .retain(|c| !(c.node == broken.target && c.port == broken.target_port));
                    }
                }
                PortDirection::Input => {
                    if let Some(port) = node.inputs.get_mut(&broken.port) {
                        port.connections
                            .retain(|c| !(c.node == broken.target && c.port == broken.target_port));
                    }
                }
            }
        }
        dangling
    }
}

impl FromIterator<Node> for FlowGraph {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        let mut graph = Self::new();
        for node in iter {
            graph.insert(node);
        }
        graph
    }
}

/// A connection whose referenced node or port is absent from the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingConnection {
    /// Node holding the broken edge.
    pub node: NodeId,
    /// Port the edge is stored on.
    pub port: String,
    /// Side of the node the edge is stored on.
    pub direction: PortDirection,
    /// Referenced node id that failed to resolve.
    pub target: NodeId,
    /// Referenced port name that failed to resolve.
    pub target_port: String,
}

impl fmt::Display for DanglingConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = match self.direction {
            PortDirection::Output => "->",
            PortDirection::Input => "<-",
        };
        write!(
            f,
            "{}:{} {} {}:{}",
            self.node, self.port, arrow, self.target, self.target_port
        )
    }
}
