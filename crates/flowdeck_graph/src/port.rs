// SPDX-License-Identifier: MIT OR Apache-2.0
//! Port and connection definitions for the flow graph.

use crate::node::NodeId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Port direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortDirection {
    /// Input port
    Input,
    /// Output port
    Output,
}

/// Key of the `index`-th input port (1-based) in a node's port map.
pub fn input_name(index: usize) -> String {
    format!("input_{index}")
}

/// Key of the `index`-th output port (1-based) in a node's port map.
pub fn output_name(index: usize) -> String {
    format!("output_{index}")
}

/// Build an input port map with `count` unconnected ports.
pub fn input_ports(count: usize) -> IndexMap<String, InputPort> {
    (1..=count).map(|i| (input_name(i), InputPort::default())).collect()
}

/// Build an output port map with `count` unconnected ports.
pub fn output_ports(count: usize) -> IndexMap<String, OutputPort> {
    (1..=count).map(|i| (output_name(i), OutputPort::default())).collect()
}

/// An input slot on a node, listing its incoming connections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputPort {
    /// Incoming edges, each referencing the source node's output port.
    pub connections: Vec<InConnection>,
}

/// An output slot on a node, listing its outgoing connections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputPort {
    /// Outgoing edges, each referencing the target node's input port.
    pub connections: Vec<OutConnection>,
}

/// Incoming edge endpoint: where the connection comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InConnection {
    /// Source node id.
    pub node: NodeId,
    /// Output port name on the source node.
    pub port: String,
}

/// Outgoing edge endpoint: where the connection goes to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutConnection {
    /// Target node id.
    pub node: NodeId,
    /// Input port name on the target node.
    pub port: String,
}
