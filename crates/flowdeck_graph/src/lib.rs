// SPDX-License-Identifier: MIT OR Apache-2.0
//! Flow-graph core for the flowdeck pipeline editor.
//!
//! This crate is the construction and serialization model behind the editor:
//! - Canonical node/port/connection records and the [`FlowGraph`] snapshot
//! - A fluent [`NodeBuilder`] that commits validated nodes to a canvas
//! - The [`Canvas`] collaborator interface plus an in-memory reference
//!   canvas for hosting an editing session
//! - An [`Exporter`] that validates the live state and emits it per node
//!
//! Rendering and interaction are out of scope; anything visual lives behind
//! the [`Canvas`] trait.

pub mod builder;
pub mod canvas;
pub mod export;
pub mod graph;
pub mod ident;
pub mod node;
pub mod payload;
pub mod port;

pub use builder::{CommitError, NodeBuilder};
pub use canvas::{Canvas, CanvasError, CanvasState, ConnectError, Workspace, WorkspaceCanvas};
pub use export::{ExportError, ExportSink, Exporter, LogSink};
pub use graph::{DanglingConnection, FlowGraph};
pub use ident::{IdGenerator, IdSpaceExhausted, MAX_ID_SUFFIX};
pub use node::{Node, NodeClass, NodeId};
pub use port::{InConnection, InputPort, OutConnection, OutputPort, PortDirection};
