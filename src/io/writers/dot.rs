//! Graphviz DOT export of the component graph.
//!
//! Vertices are labelled with the component name and its instability; edges
//! carry their classification label and colour.

use crate::analysis::{AnalysisReport, ComponentGraph, EdgeClassification, GraphDescription};
use crate::io::output::OutputWriter;
use std::io::{self, Write};

/// Configuration for DOT output
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Graph title, rendered at the top
    pub title: String,
    /// Maximum decimal places of the instability in vertex labels
    pub precision: usize,
    pub warning_color: String,
    pub compliant_color: String,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            title: "InstabilityDependencyFlow".to_string(),
            precision: 3,
            warning_color: "red".to_string(),
            compliant_color: "green".to_string(),
        }
    }
}

pub struct DotWriter<W: Write> {
    writer: W,
    config: DotConfig,
}

impl<W: Write> DotWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, DotConfig::default())
    }

    pub fn with_config(writer: W, config: DotConfig) -> Self {
        Self { writer, config }
    }

    pub fn write_graph(&mut self, graph: &ComponentGraph) -> io::Result<()> {
        let description = graph.describe(&self.config.title, self.config.precision);
        self.write_description(&description)
    }

    pub fn write_description(&mut self, description: &GraphDescription) -> io::Result<()> {
        let title = escape(&description.title);
        writeln!(self.writer, "digraph \"{title}\" {{")?;
        writeln!(self.writer, "  labelloc=\"t\";")?;
        writeln!(self.writer, "  label=\"{title}\";")?;
        writeln!(self.writer, "  fontsize=\"30\";")?;

        for vertex in &description.vertices {
            writeln!(
                self.writer,
                "  {} [label=\"{}\"];",
                vertex.id,
                escape(&vertex.label)
            )?;
        }

        for edge in &description.edges {
            let color = match edge.classification {
                EdgeClassification::FlowWarning => &self.config.warning_color,
                EdgeClassification::Compliant => &self.config.compliant_color,
            };
            writeln!(
                self.writer,
                "  {} -> {} [label=\"{}\", color=\"{}\"];",
                edge.source_id,
                edge.target_id,
                escape(&edge.label),
                escape(color)
            )?;
        }

        writeln!(self.writer, "}}")
    }
}

impl<W: Write> OutputWriter for DotWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_graph(&report.graph)?;
        Ok(())
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
