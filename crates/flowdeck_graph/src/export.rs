// SPDX-License-Identifier: MIT OR Apache-2.0
//! Snapshot export of the live canvas state.

use crate::canvas::Canvas;
use crate::graph::FlowGraph;
use crate::node::NodeId;

/// Receives one record per exported node.
pub trait ExportSink {
    /// Called once per node with its id and serialized record.
    fn emit(&mut self, id: &NodeId, record: &str);
}

/// Sink that writes each entry to the log: one line for the id, one for the
/// record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ExportSink for LogSink {
    fn emit(&mut self, id: &NodeId, record: &str) {
        tracing::info!("{id}");
        tracing::info!("{record}");
    }
}

/// Reads the canvas state and turns it into a validated [`FlowGraph`]
/// snapshot.
#[derive(Debug)]
pub struct Exporter<S> {
    sink: S,
}

impl<S: ExportSink> Exporter<S> {
    /// Create an exporter over the given sink.
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Snapshot the canvas.
    ///
    /// Connections that no longer resolve to a live node and port are
    /// reported and excluded from the snapshot; every surviving entry is
    /// emitted to the sink. The canvas itself is not touched.
    pub fn export<C: Canvas>(&mut self, canvas: &C) -> Result<FlowGraph, ExportError> {
        let mut graph = canvas.export_state().workspace.data;
        for broken in graph.prune_dangling() {
            tracing::warn!("dropping dangling connection {broken}");
        }
        for (id, node) in graph.iter() {
            let record = serde_json::to_string(node)?;
            self.sink.emit(id, &record);
        }
        Ok(graph)
    }

    /// Consume the exporter and hand back its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Error raised when a snapshot cannot be produced.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// A node record could not be serialized.
    #[error("cannot serialize node record: {0}")]
    Serialize(#[from] serde_json::Error),
}
