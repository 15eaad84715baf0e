use crate::analysis::{AnalysisReport, Diagnostic, StabilityDirectionViolation};
use crate::io::output::OutputWriter;
use crate::metrics::ComponentMetrics;
use colored::*;
use std::io::Write;

/// Distance above which a component is flagged as far from the main sequence.
const DISTANCE_WARNING: f64 = 0.7;

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl TerminalWriter<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", "═══════════════════════════════════════════".cyan())?;
        writeln!(self.writer, "{}", "        COMPONENT STABILITY REPORT".bold().cyan())?;
        writeln!(self.writer, "{}", "═══════════════════════════════════════════".cyan())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_metrics(&mut self, metrics: &[ComponentMetrics]) -> anyhow::Result<()> {
        let width = metrics
            .iter()
            .map(|m| m.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Component".len());

        writeln!(self.writer, "📊 {}", "METRICS".bold())?;
        writeln!(
            self.writer,
            "{:<width$}  {:>7}  {:>6}  {:>7}  {:>5}  {:>5}  {:>8}",
            "Component", "Classes", "FanIn", "FanOut", "I", "A", "Distance"
        )?;
        for m in metrics {
            let distance = format!("{:.3}", m.distance);
            let distance = if m.distance > DISTANCE_WARNING {
                distance.red()
            } else {
                distance.normal()
            };
            writeln!(
                self.writer,
                "{:<width$}  {:>7}  {:>6}  {:>7}  {:>5.3}  {:>5.3}  {:>8}",
                m.name, m.num_classes, m.fan_in, m.fan_out, m.instability, m.abstractness, distance
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_violations(&mut self, violations: &[StabilityDirectionViolation]) -> anyhow::Result<()> {
        if violations.is_empty() {
            writeln!(
                self.writer,
                "{} No stability-direction violations",
                "✓".green()
            )?;
            writeln!(self.writer)?;
            return Ok(());
        }

        writeln!(
            self.writer,
            "⚠ {} ({})",
            "VIOLATIONS".bold().red(),
            violations.len()
        )?;
        for v in violations {
            writeln!(
                self.writer,
                "  {} (I={:.3}) depends upon less stable {} (I={:.3})",
                v.source.as_str().yellow(),
                v.source_instability,
                v.outside.as_str().yellow(),
                v.outside_instability
            )?;
            if let Some(detail) = &v.detail {
                for entry in &detail.dependents {
                    for importer in &entry.importing_classes {
                        writeln!(self.writer, "    {} imports {}", importer, entry.imported_class)?;
                    }
                }
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_diagnostics(&mut self, diagnostics: &[Diagnostic]) -> anyhow::Result<()> {
        if diagnostics.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "🔎 {}", "DIAGNOSTICS".bold())?;
        for d in diagnostics {
            writeln!(self.writer, "  {d}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_metrics(&report.metrics)?;
        self.write_violations(&report.violations)?;
        self.write_diagnostics(&report.diagnostics)?;
        self.writer.flush()?;
        Ok(())
    }
}
