use crate::analysis::{
    AnalysisReport, DependencyPath, Diagnostic, GraphEdge, StabilityDirectionViolation,
};
use crate::io::output::OutputWriter;
use crate::metrics::ComponentMetrics;
use serde::Serialize;
use std::io::Write;

/// Serialized shape of an [`AnalysisReport`].
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub components: &'a [ComponentMetrics],
    pub violations: &'a [StabilityDirectionViolation],
    pub diagnostics: &'a [Diagnostic],
    pub edges: Vec<GraphEdge>,
    pub warning_paths: &'a [DependencyPath],
}

impl<'a> JsonReport<'a> {
    pub fn new(report: &'a AnalysisReport) -> Self {
        Self {
            components: &report.metrics,
            violations: &report.violations,
            diagnostics: &report.diagnostics,
            edges: report.graph.edges(),
            warning_paths: &report.warning_paths,
        }
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&JsonReport::new(report))?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}
