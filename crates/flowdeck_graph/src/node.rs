// SPDX-License-Identifier: MIT OR Apache-2.0
//! Node definitions for the flow graph.

use crate::port::{InputPort, OutputPort};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Unique identifier for a node, formatted `<CLASS>_<n>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create an identifier from a class and a numeric suffix.
    pub fn new(class: NodeClass, suffix: u32) -> Self {
        Self(format!("{class}_{suffix}"))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Component kind of a node; the dispatch point for downstream runners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeClass {
    /// Generic component, the default kind.
    #[default]
    Any,
    /// Produces work items.
    Source,
    /// Transforms work items.
    Process,
    /// Consumes work items.
    Sink,
}

impl NodeClass {
    /// Class name as it appears in identifiers and the wire format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::Source => "SOURCE",
            Self::Process => "PROCESS",
            Self::Sink => "SINK",
        }
    }
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed component instance in the flow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique instance id.
    pub id: NodeId,
    /// Display label, may be empty.
    pub name: String,
    /// Component kind.
    pub class: NodeClass,
    /// Opaque configuration payload.
    pub data: Value,
    /// Rendering fragment derived from the name; carried for export
    /// fidelity, never interpreted.
    pub html: String,
    /// Input ports keyed `input_1..input_n`.
    pub inputs: IndexMap<String, InputPort>,
    /// Output ports keyed `output_1..output_n`.
    pub outputs: IndexMap<String, OutputPort>,
    /// Canvas x coordinate.
    pub pos_x: f64,
    /// Canvas y coordinate.
    pub pos_y: f64,
}

impl Node {
    /// Whether the node has an input port with this name.
    pub fn has_input(&self, port: &str) -> bool {
        self.inputs.contains_key(port)
    }

    /// Whether the node has an output port with this name.
    pub fn has_output(&self, port: &str) -> bool {
        self.outputs.contains_key(port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_format() {
        let id = NodeId::new(NodeClass::Any, 42);
        assert_eq!(id.as_str(), "ANY_42");
        assert_eq!(id, NodeId::from("ANY_42"));
    }

    #[test]
    fn test_class_wire_names() {
        assert_eq!(NodeClass::Source.to_string(), "SOURCE");
        assert_eq!(serde_json::to_string(&NodeClass::Any).unwrap(), "\"ANY\"");
        let parsed: NodeClass = serde_json::from_str("\"PROCESS\"").unwrap();
        assert_eq!(parsed, NodeClass::Process);
    }
}
