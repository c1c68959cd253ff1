// SPDX-License-Identifier: MIT OR Apache-2.0
//! Interactive editing session over a workspace canvas.

use crate::form::NewComponentForm;
use flowdeck_graph::{Exporter, LogSink, NodeId, WorkspaceCanvas};
use std::io::{self, BufRead, Write};

/// One interactive editing session.
///
/// The canvas is only ever touched from this loop; each command runs to
/// completion before the next line is read.
pub struct EditorApp {
    canvas: WorkspaceCanvas,
}

/// Fatal session error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The interactive input or output stream is unusable.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}

impl EditorApp {
    /// Create a session over an empty canvas.
    pub fn new() -> Self {
        Self {
            canvas: WorkspaceCanvas::new(),
        }
    }

    /// Run the command loop on stdin/stdout until `quit` or end of input.
    pub fn run(mut self) -> Result<(), AppError> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.session(&mut stdin.lock().lines(), &mut stdout)
    }

    fn session(
        &mut self,
        input: &mut dyn Iterator<Item = io::Result<String>>,
        output: &mut dyn Write,
    ) -> Result<(), AppError> {
        loop {
            write!(output, "flowdeck> ")?;
            output.flush()?;
            let Some(line) = input.next() else { break };
            let line = line?;
            let mut parts = line.split_whitespace();
            let Some(command) = parts.next() else { continue };
            let args: Vec<&str> = parts.collect();

            match command {
                "new" => {
                    NewComponentForm::run(input, output, &mut self.canvas)?;
                }
                "connect" => self.connect(&args, output)?,
                "disconnect" => self.disconnect(&args, output)?,
                "remove" => self.remove(&args, output)?,
                "list" => self.list(output)?,
                "export" => self.export(output)?,
                "quit" | "exit" => break,
                other => writeln!(
                    output,
                    "unknown command: {other} (try: new, connect, disconnect, remove, list, export, quit)"
                )?,
            }
        }
        Ok(())
    }

    fn connect(&mut self, args: &[&str], output: &mut dyn Write) -> io::Result<()> {
        let [from, out_port, to, in_port] = args else {
            return writeln!(output, "usage: connect <from> <output_port> <to> <input_port>");
        };
        match self
            .canvas
            .connect(&NodeId::from(*from), out_port, &NodeId::from(*to), in_port)
        {
            Ok(()) => writeln!(output, "connected"),
            Err(err) => writeln!(output, "cannot connect: {err}"),
        }
    }

    fn disconnect(&mut self, args: &[&str], output: &mut dyn Write) -> io::Result<()> {
        let [from, out_port, to, in_port] = args else {
            return writeln!(output, "usage: disconnect <from> <output_port> <to> <input_port>");
        };
        match self
            .canvas
            .disconnect(&NodeId::from(*from), out_port, &NodeId::from(*to), in_port)
        {
            Ok(()) => writeln!(output, "disconnected"),
            Err(err) => writeln!(output, "cannot disconnect: {err}"),
        }
    }

    fn remove(&mut self, args: &[&str], output: &mut dyn Write) -> io::Result<()> {
        let [id] = args else {
            return writeln!(output, "usage: remove <id>");
        };
        match self.canvas.remove_node(&NodeId::from(*id)) {
            Some(node) => writeln!(output, "removed {}", node.id),
            None => writeln!(output, "no such node: {id}"),
        }
    }

    fn list(&self, output: &mut dyn Write) -> io::Result<()> {
        if self.canvas.node_count() == 0 {
            return writeln!(output, "canvas is empty");
        }
        for id in self.canvas.node_ids() {
            writeln!(output, "{id}")?;
        }
        Ok(())
    }

    fn export(&self, output: &mut dyn Write) -> io::Result<()> {
        match Exporter::new(LogSink).export(&self.canvas) {
            Ok(graph) => writeln!(output, "exported {} node(s)", graph.len()),
            Err(err) => {
                tracing::error!("export failed: {err}");
                writeln!(output, "export failed: {err}")
            }
        }
    }
}

impl Default for EditorApp {
    fn default() -> Self {
        Self::new()
    }
}
