// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fluent construction of new nodes.

use crate::canvas::{Canvas, CanvasError};
use crate::ident::{IdGenerator, IdSpaceExhausted};
use crate::node::{Node, NodeClass, NodeId};
use crate::port::{input_ports, output_ports};
use serde_json::{Map, Value};

/// Accumulates the attributes of a node before it is committed to a canvas.
///
/// Every chained call consumes and returns the builder, and [`commit`]
/// consumes it for good, so a committed draft cannot be reused. The builder
/// performs no validation of its own; it is a pure accumulator.
///
/// [`commit`]: NodeBuilder::commit
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    class: NodeClass,
    name: String,
    html: String,
    data: Value,
    input_count: usize,
    output_count: usize,
    x: f64,
    y: f64,
}

impl NodeBuilder {
    /// Start a draft of the given class.
    ///
    /// Defaults: empty name and rendering fragment, `{}` payload, no ports,
    /// origin position.
    pub fn new(class: NodeClass) -> Self {
        Self {
            class,
            name: String::new(),
            html: String::new(),
            data: Value::Object(Map::new()),
            input_count: 0,
            output_count: 0,
            x: 0.0,
            y: 0.0,
        }
    }

    /// Set the display name and derive the rendering fragment from it.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self.html = format!("<div>{}</div>", self.name);
        self
    }

    /// Attach the configuration payload.
    ///
    /// The value must already be parsed; text parsing happens at the
    /// authoring boundary, see [`crate::payload::parse_payload`].
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Set the input port count; replaces any previous count.
    pub fn with_inputs(mut self, count: usize) -> Self {
        self.input_count = count;
        self
    }

    /// Set the output port count; replaces any previous count.
    pub fn with_outputs(mut self, count: usize) -> Self {
        self.output_count = count;
        self
    }

    /// Place the node on the canvas.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Allocate an id, assemble the node, and register it on the canvas.
    ///
    /// A canvas rejection surfaces as a recoverable [`CommitError`]; the
    /// canvas is left untouched in that case.
    pub fn commit<C: Canvas>(self, canvas: &mut C) -> Result<NodeId, CommitError> {
        let id = IdGenerator::new().allocate(self.class, canvas)?;
        let node = Node {
            id: id.clone(),
            name: self.name,
            class: self.class,
            data: self.data,
            html: self.html,
            inputs: input_ports(self.input_count),
            outputs: output_ports(self.output_count),
            pos_x: self.x,
            pos_y: self.y,
        };
        canvas.add_node(node)?;
        Ok(id)
    }
}

/// Error raised when a draft cannot be committed.
#[derive(Debug, thiserror::Error)]
pub enum CommitError {
    /// No identifier could be allocated.
    #[error(transparent)]
    Id(#[from] IdSpaceExhausted),

    /// The canvas rejected the assembled node.
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}
