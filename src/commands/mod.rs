//! Command handlers behind the CLI.

pub mod analyze;
pub mod init;
pub mod scan;

use crate::analysis::{analyze, AnalysisOptions, AnalysisReport, ComponentUniverse};
use crate::cli::OutputArgs;
use crate::config::{load_config, load_config_file, StabilityConfig};
use crate::core::{ComponentId, ModuleSource};
use crate::io::output::{write_file_with, GRAPH_FILE, MAIN_SEQUENCE_FILE, REPORT_FILE};
use crate::io::writers::{CsvWriter, DotWriter, JsonWriter, TerminalWriter};
use crate::io::{OutputFormat, OutputWriter};
use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;
use tracing::{info, warn};

/// Exit status when `--fail-on-violation` is set and a violation was found.
pub const VIOLATION_EXIT_CODE: u8 = 2;

/// Config file (explicit or discovered) with CLI overrides applied.
pub fn resolve_config(args: &OutputArgs) -> Result<StabilityConfig> {
    let mut config = match &args.config {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => load_config(),
    };

    if !args.detail.is_empty() {
        config.detail_components = args.detail.clone();
    }
    if args.no_parallel {
        config.parallel = false;
    }
    if let Some(title) = &args.title {
        config.graph.title = title.clone();
    }
    Ok(config)
}

/// Analyze `sources`, write the output files and print the summary.
pub fn report_modules(
    sources: Vec<ModuleSource>,
    config: &StabilityConfig,
    args: &OutputArgs,
) -> Result<ExitCode> {
    let universe = ComponentUniverse::from_sources(sources).context("Invalid component input")?;
    if universe.is_empty() {
        warn!("No components with classes found");
    }

    let options = AnalysisOptions {
        detail_components: config
            .detail_components
            .iter()
            .map(|name| ComponentId::from(name.as_str()))
            .collect(),
        parallel: config.parallel,
        ..AnalysisOptions::default()
    };
    let report = analyze(&universe, &options);

    write_outputs(&report, &args.output_dir, config)?;
    print_summary(&report, args.format)?;

    Ok(exit_code(&report, args.fail_on_violation))
}

/// Write `mainsequence.csv`, `components.dot` and `report.json`, replacing
/// existing files.
pub fn write_outputs(report: &AnalysisReport, dir: &Path, config: &StabilityConfig) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    write_file_with(&dir.join(MAIN_SEQUENCE_FILE), |out| {
        CsvWriter::new(out).write_report(report)
    })?;
    write_file_with(&dir.join(GRAPH_FILE), |out| {
        DotWriter::with_config(out, config.graph.dot_config()).write_report(report)
    })?;
    write_file_with(&dir.join(REPORT_FILE), |out| {
        JsonWriter::new(out).write_report(report)
    })?;

    info!("Wrote reports to {}", dir.display());
    Ok(())
}

pub fn print_summary(report: &AnalysisReport, format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    match format {
        OutputFormat::Terminal => TerminalWriter::new(stdout.lock()).write_report(report),
        OutputFormat::Json => JsonWriter::new(stdout.lock()).write_report(report),
    }
}

pub fn exit_code(report: &AnalysisReport, fail_on_violation: bool) -> ExitCode {
    if fail_on_violation && report.has_violations() {
        ExitCode::from(VIOLATION_EXIT_CODE)
    } else {
        ExitCode::SUCCESS
    }
}
