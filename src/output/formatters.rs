//! Output formatting functionality

use crate::error::Result;
use crate::models::graph::DependencyGraph;
use ansi_term::Colour::Blue;
use ansi_term::Style;

/// Format the graph as a single compact JSON object
pub fn format_graph_json(graph: &DependencyGraph) -> Result<String> {
    graph.to_json_string()
}

/// Format the graph as an indented JSON object
pub fn format_graph_json_pretty(graph: &DependencyGraph) -> Result<String> {
    Ok(serde_json::to_string_pretty(graph)?)
}

/// Format the graph as a human-readable dump, one node per block
pub fn format_graph_text(graph: &DependencyGraph, use_colors: bool) -> String {
    let mut output = String::new();
    let mut nodes: Vec<(&String, &Vec<String>)> = graph.iter().collect();
    nodes.sort_by(|a, b| a.0.cmp(b.0));

    for (node, edges) in nodes {
        let quoted = format!("{:?}", node);
        if use_colors {
            output.push_str(&format!("{}: {{", Blue.bold().paint(quoted)));
        } else {
            output.push_str(&format!("{}: {{", quoted));
        }
        if !edges.is_empty() {
            output.push('\n');
        }
        for edge in edges {
            let quoted = format!("{:?}", edge);
            if use_colors {
                output.push_str(&format!("  {},\n", Style::new().dimmed().paint(quoted)));
            } else {
                output.push_str(&format!("  {},\n", quoted));
            }
        }
        output.push_str("}\n");
    }

    output
}
