// SPDX-License-Identifier: MIT OR Apache-2.0
//! Canvas collaborator interface and the in-memory reference canvas.

use crate::graph::FlowGraph;
use crate::node::{Node, NodeId};
use crate::port::{InConnection, OutConnection};
use serde::{Deserialize, Serialize};

/// The surface holding the live node graph during editing.
///
/// The core never resolves a canvas from ambient state; callers hand a
/// handle to whatever implementation hosts the session.
pub trait Canvas {
    /// Whether a node with this id is live on the canvas.
    fn contains(&self, id: &NodeId) -> bool;

    /// Register a node. The canvas may reject it, e.g. for an id it
    /// already holds.
    fn add_node(&mut self, node: Node) -> Result<(), CanvasError>;

    /// Snapshot the full canvas state.
    fn export_state(&self) -> CanvasState;
}

/// Full exported canvas state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasState {
    /// The active workspace.
    pub workspace: Workspace,
}

/// One workspace inside the canvas state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    /// The workspace's flow graph.
    pub data: FlowGraph,
}

/// Error raised when the canvas rejects a new node.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    /// A node with the same id is already live.
    #[error("node already on canvas: {0}")]
    DuplicateNode(NodeId),
}

/// Error raised when an edge cannot be created or removed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectError {
    /// Referenced node does not exist.
    #[error("node not found: {0}")]
    NodeNotFound(NodeId),

    /// Referenced port does not exist on the node.
    #[error("port {port} not found on node {node}")]
    PortNotFound {
        /// Node the port was looked up on.
        node: NodeId,
        /// Name of the missing port.
        port: String,
    },

    /// The edge already exists.
    #[error("ports already connected")]
    AlreadyConnected,

    /// The edge does not exist.
    #[error("ports not connected")]
    NotConnected,
}

/// In-memory canvas holding the live, mutable graph of one editing session.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceCanvas {
    graph: FlowGraph,
}

impl WorkspaceCanvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a node by id.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.graph.get(id)
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.graph.len()
    }

    /// Ids of all live nodes.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.graph.node_ids()
    }

    /// Connect an output port to an input port.
    ///
    /// The edge is stored symmetrically on both endpoints. Both ports must
    /// exist; an edge may join two ports of the same node.
    pub fn connect(
        &mut self,
        from: &NodeId,
        output: &str,
        to: &NodeId,
        input: &str,
    ) -> Result<(), ConnectError> {
        let source = self
            .graph
            .get(from)
            .ok_or_else(|| ConnectError::NodeNotFound(from.clone()))?;
        let out_port = source.outputs.get(output).ok_or_else(|| ConnectError::PortNotFound {
            node: from.clone(),
            port: output.to_owned(),
        })?;
        let target = self
            .graph
            .get(to)
            .ok_or_else(|| ConnectError::NodeNotFound(to.clone()))?;
        if !target.has_input(input) {
            return Err(ConnectError::PortNotFound {
                node: to.clone(),
                port: input.to_owned(),
            });
        }
        if out_port
            .connections
            .iter()
            .any(|c| c.node == *to && c.port == input)
        {
            return Err(ConnectError::AlreadyConnected);
        }

        if let Some(port) = self.graph.get_mut(from).and_then(|n| n.outputs.get_mut(output)) {
            port.connections.push(OutConnection {
                node: to.clone(),
                port: input.to_owned(),
            });
        }
        if let Some(port) = self.graph.get_mut(to).and_then(|n| n.inputs.get_mut(input)) {
            port.connections.push(InConnection {
                node: from.clone(),
                port: output.to_owned(),
            });
        }
        Ok(())
    }

    /// Remove an edge; both stored halves are dropped.
    pub fn disconnect(
        &mut self,
        from: &NodeId,
        output: &str,
        to: &NodeId,
        input: &str,
    ) -> Result<(), ConnectError> {
        let source = self
            .graph
            .get(from)
            .ok_or_else(|| ConnectError::NodeNotFound(from.clone()))?;
        let out_port = source.outputs.get(output).ok_or_else(|| ConnectError::PortNotFound {
            node: from.clone(),
            port: output.to_owned(),
        })?;
        if !out_port
            .connections
            .iter()
            .any(|c| c.node == *to && c.port == input)
        {
            return Err(ConnectError::NotConnected);
        }

        if let Some(port) = self.graph.get_mut(from).and_then(|n| n.outputs.get_mut(output)) {
            port.connections.retain(|c| !(c.node == *to && c.port == input));
        }
        if let Some(port) = self.graph.get_mut(to).and_then(|n| n.inputs.get_mut(input)) {
            port.connections.retain(|c| !(c.node == *from && c.port == output));
        }
        Ok(())
    }

    /// Remove a node and every edge referencing it from other nodes.
    pub fn remove_node(&mut self, id: &NodeId) -> Option<Node> {
        let node = self.graph.remove(id)?;
        for other in self.graph.nodes_mut() {
            for port in other.outputs.values_mut() {
                port.connections.retain(|c| c.node != *id);
            }
            for port in other.inputs.values_mut() {
                port.connections.retain(|c| c.node != *id);
            }
        }
        Some(node)
    }
}

impl Canvas for WorkspaceCanvas {
    fn contains(&self, id: &NodeId) -> bool {
        self.graph.contains(id)
    }

    fn add_node(&mut self, node: Node) -> Result<(), CanvasError> {
        if self.graph.contains(&node.id) {
            return Err(CanvasError::DuplicateNode(node.id));
        }
        self.graph.insert(node);
        Ok(())
    }

    fn export_state(&self) -> CanvasState {
        CanvasState {
            workspace: Workspace {
                data: self.graph.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeClass;
    use crate::port::{input_ports, output_ports};

    fn node(id: &str, inputs: usize, outputs: usize) -> Node {
        Node {
            id: NodeId::from(id),
            name: String::new(),
            class: NodeClass::Any,
            data: serde_json::json!({}),
            html: String::new(),
            inputs: input_ports(inputs),
            outputs: output_ports(outputs),
            pos_x: 0.0,
            pos_y: 0.0,
        }
    }

    fn two_node_canvas() -> WorkspaceCanvas {
        let mut canvas = WorkspaceCanvas::new();
        canvas.add_node(node("ANY_1", 0, 1)).unwrap();
        canvas.add_node(node("ANY_2", 1, 0)).unwrap();
        canvas
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut canvas = two_node_canvas();
        let err = canvas.add_node(node("ANY_1", 0, 0)).unwrap_err();
        assert_eq!(err, CanvasError::DuplicateNode(NodeId::from("ANY_1")));
        assert_eq!(canvas.node_count(), 2);
    }

    #[test]
    fn test_connect_stores_both_halves() {
        let mut canvas = two_node_canvas();
        let (a, b) = (NodeId::from("ANY_1"), NodeId::from("ANY_2"));
        canvas.connect(&a, "output_1", &b, "input_1").unwrap();

        let out = &canvas.node(&a).unwrap().outputs["output_1"].connections;
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].node, b);
        assert_eq!(out[0].port, "input_1");

        let inc = &canvas.node(&b).unwrap().inputs["input_1"].connections;
        assert_eq!(inc.len(), 1);
        assert_eq!(inc[0].node, a);
        assert_eq!(inc[0].port, "output_1");
    }

    #[test]
    fn test_connect_validates_endpoints() {
        let mut canvas = two_node_canvas();
        let (a, b) = (NodeId::from("ANY_1"), NodeId::from("ANY_2"));

        let err = canvas.connect(&NodeId::from("ANY_9"), "output_1", &b, "input_1");
        assert_eq!(err, Err(ConnectError::NodeNotFound(NodeId::from("ANY_9"))));

        let err = canvas.connect(&a, "output_7", &b, "input_1");
        assert!(matches!(err, Err(ConnectError::PortNotFound { .. })));

        let err = canvas.connect(&a, "output_1", &b, "input_7");
        assert!(matches!(err, Err(ConnectError::PortNotFound { .. })));

        canvas.connect(&a, "output_1", &b, "input_1").unwrap();
        let err = canvas.connect(&a, "output_1", &b, "input_1");
        assert_eq!(err, Err(ConnectError::AlreadyConnected));
    }

    #[test]
    fn test_self_edge_is_legal() {
        let mut canvas = WorkspaceCanvas::new();
        canvas.add_node(node("ANY_3", 1, 1)).unwrap();
        let id = NodeId::from("ANY_3");
        canvas.connect(&id, "output_1", &id, "input_1").unwrap();

        let n = canvas.node(&id).unwrap();
        assert_eq!(n.outputs["output_1"].connections[0].node, id);
        assert_eq!(n.inputs["input_1"].connections[0].node, id);
    }

    #[test]
    fn test_disconnect() {
        let mut canvas = two_node_canvas();
        let (a, b) = (NodeId::from("ANY_1"), NodeId::from("ANY_2"));

        let err = canvas.disconnect(&a, "output_1", &b, "input_1");
        assert_eq!(err, Err(ConnectError::NotConnected));

        canvas.connect(&a, "output_1", &b, "input_1").unwrap();
        canvas.disconnect(&a, "output_1", &b, "input_1").unwrap();
        assert!(canvas.node(&a).unwrap().outputs["output_1"].connections.is_empty());
        assert!(canvas.node(&b).unwrap().inputs["input_1"].connections.is_empty());
    }

    #[test]
    fn test_remove_node_cleans_edges() {
        let mut canvas = two_node_canvas();
        let (a, b) = (NodeId::from("ANY_1"), NodeId::from("ANY_2"));
        canvas.connect(&a, "output_1", &b, "input_1").unwrap();

        let removed = canvas.remove_node(&b).unwrap();
        assert_eq!(removed.id, b);
        assert!(canvas.node(&a).unwrap().outputs["output_1"].connections.is_empty());
        assert!(canvas.remove_node(&b).is_none());
    }

    #[test]
    fn test_export_state_nesting() {
        let canvas = two_node_canvas();
        let state = canvas.export_state();
        assert_eq!(state.workspace.data.len(), 2);
    }
}
