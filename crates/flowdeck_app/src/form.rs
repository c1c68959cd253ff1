// SPDX-License-Identifier: MIT OR Apache-2.0
//! The new-component form.

use flowdeck_graph::payload::parse_payload;
use flowdeck_graph::{NodeBuilder, NodeClass, NodeId, WorkspaceCanvas};
use std::io::{self, Write};

/// Displayed upper bound for port counts. A form convention only; the graph
/// model accepts any count.
const MAX_PORTS: usize = 10;

/// Prompts for the component fields and commits the node to the canvas.
pub struct NewComponentForm;

impl NewComponentForm {
    /// Run the form against the given streams.
    ///
    /// Returns the created node's id, or `None` when the commit was
    /// rejected; a rejection is reported, never fatal.
    pub fn run(
        input: &mut dyn Iterator<Item = io::Result<String>>,
        output: &mut dyn Write,
        canvas: &mut WorkspaceCanvas,
    ) -> io::Result<Option<NodeId>> {
        let name = prompt(input, output, "name: ")?;
        let inputs = port_count(&prompt(input, output, "inputs (0-10): ")?);
        let outputs = port_count(&prompt(input, output, "outputs (0-10): ")?);
        let data = parse_payload(&prompt(input, output, "data: ")?);

        let committed = NodeBuilder::new(NodeClass::Any)
            .with_name(name)
            .with_inputs(inputs)
            .with_outputs(outputs)
            .with_data(data)
            .commit(canvas);
        match committed {
            Ok(id) => {
                writeln!(output, "created {id}")?;
                Ok(Some(id))
            }
            Err(err) => {
                tracing::warn!("component was not created: {err}");
                writeln!(output, "component was not created: {err}")?;
                Ok(None)
            }
        }
    }
}

fn prompt(
    input: &mut dyn Iterator<Item = io::Result<String>>,
    output: &mut dyn Write,
    label: &str,
) -> io::Result<String> {
    write!(output, "{label}")?;
    output.flush()?;
    match input.next() {
        Some(line) => Ok(line?.trim().to_owned()),
        None => Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed")),
    }
}

/// Clamp the operator-supplied count to the displayed 0-10 range; text that
/// is not a count reads as 0.
fn port_count(text: &str) -> usize {
    text.parse::<usize>().unwrap_or(0).min(MAX_PORTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(lines: &[&str]) -> impl Iterator<Item = io::Result<String>> {
        lines
            .iter()
            .map(|s| Ok(s.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_count_clamp() {
        assert_eq!(port_count("7"), 7);
        assert_eq!(port_count("10"), 10);
        assert_eq!(port_count("99"), 10);
        assert_eq!(port_count("abc"), 0);
        assert_eq!(port_count(""), 0);
    }

    #[test]
    fn test_form_creates_node() {
        let mut canvas = WorkspaceCanvas::new();
        let mut input = scripted(&["Sum", "2", "1", r#"{"op":"add"}"#]);
        let mut out = Vec::new();

        let id = NewComponentForm::run(&mut input, &mut out, &mut canvas)
            .unwrap()
            .unwrap();

        let node = canvas.node(&id).unwrap();
        assert_eq!(node.name, "Sum");
        assert_eq!(node.inputs.len(), 2);
        assert_eq!(node.outputs.len(), 1);
        assert_eq!(node.data, serde_json::json!({"op": "add"}));
    }

    #[test]
    fn test_form_tolerates_bad_fields() {
        let mut canvas = WorkspaceCanvas::new();
        let mut input = scripted(&["", "twelve", "40", "not json"]);
        let mut out = Vec::new();

        let id = NewComponentForm::run(&mut input, &mut out, &mut canvas)
            .unwrap()
            .unwrap();

        let node = canvas.node(&id).unwrap();
        assert_eq!(node.name, "");
        assert!(node.inputs.is_empty());
        assert_eq!(node.outputs.len(), 10);
        assert_eq!(node.data, serde_json::json!({}));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut canvas = WorkspaceCanvas::new();
        let mut input = scripted(&["Sum"]);
        let mut out = Vec::new();

        let err = NewComponentForm::run(&mut input, &mut out, &mut canvas).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
