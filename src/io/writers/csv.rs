//! Main sequence chart data: one `name,instability,abstractness,distance`
//! row per component, no header, in component order.

use crate::analysis::AnalysisReport;
use crate::io::output::OutputWriter;
use crate::metrics::ComponentMetrics;
use std::io::Write;

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_metrics(&mut self, metrics: &[ComponentMetrics]) -> anyhow::Result<()> {
        for m in metrics {
            writeln!(
                self.writer,
                "{},{:?},{:?},{:?}",
                escape_field(&m.name),
                m.instability,
                m.abstractness,
                m.distance
            )?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_metrics(&report.metrics)
    }
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
