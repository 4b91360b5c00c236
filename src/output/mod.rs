//! Output formatting and writing functionality

mod formatters;
mod writers;

pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::graph::DependencyGraph;

/// Trait for graph formatters
pub trait Formatter {
    /// Format the graph into a string
    fn format(&self, graph: &DependencyGraph) -> Result<String>;
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter {
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, graph: &DependencyGraph) -> Result<String> {
        if self.pretty {
            formatters::format_graph_json_pretty(graph)
        } else {
            formatters::format_graph_json(graph)
        }
    }
}

/// Human-readable dump of the graph, one block per node
pub struct TextFormatter {
    pub use_colors: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, graph: &DependencyGraph) -> Result<String> {
        Ok(formatters::format_graph_text(graph, self.use_colors))
    }
}
