use crate::analysis::AnalysisReport;
use anyhow::Context;
use clap::ValueEnum;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const MAIN_SEQUENCE_FILE: &str = "mainsequence.csv";
pub const GRAPH_FILE: &str = "components.dot";
pub const REPORT_FILE: &str = "report.json";
pub const FACTS_FILE: &str = "facts.json";

/// How the summary is printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored tables
    #[default]
    Terminal,
    /// The JSON report
    Json,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

/// Create or replace `path` and hand a buffered writer to `write`. The buffer
/// is flushed on success and dropped on every other path.
pub fn write_file_with<F>(path: &Path, write: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> anyhow::Result<()>,
{
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write(&mut writer).with_context(|| format!("Failed to write {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_with_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(MAIN_SEQUENCE_FILE);
        std::fs::write(&path, "stale content that is longer").unwrap();

        write_file_with(&path, |out| {
            write!(out, "fresh")?;
            Ok(())
        })
        .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_write_file_with_reports_missing_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join(GRAPH_FILE);

        let err = write_file_with(&path, |_| Ok(())).unwrap_err();

        assert!(err.to_string().starts_with("Failed to create"));
    }
}
