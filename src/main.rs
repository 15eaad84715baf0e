use anyhow::Result;
use clap::Parser;
use stabilitymap::cli::{Cli, Commands, OutputArgs};
use stabilitymap::commands;
use stabilitymap::commands::scan::ScanRequest;
use stabilitymap::io::OutputFormat;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    match cli.command {
        Commands::Analyze { facts, output } => {
            apply_color_mode(&output);
            commands::analyze::analyze_facts(&facts, &output)
        }
        Commands::Scan {
            path,
            source_dir,
            emit_facts,
            output,
        } => {
            apply_color_mode(&output);
            let request = ScanRequest {
                root: &path,
                source_dir,
                emit_facts,
            };
            commands::scan::scan_project(request, &output)
        }
        Commands::Init { force, dir } => {
            commands::init::init_config(&dir, force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

// Logs go to stderr so stdout only carries the summary.
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn apply_color_mode(output: &OutputArgs) {
    if output.plain || output.format == OutputFormat::Json {
        colored::control::set_override(false);
    }
}
