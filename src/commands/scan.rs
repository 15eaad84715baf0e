use crate::cli::OutputArgs;
use crate::extraction::{ComponentScanner, JavaClassFactExtractor};
use crate::io::facts::write_facts;
use crate::io::output::{write_file_with, FACTS_FILE};
use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

pub struct ScanRequest<'a> {
    pub root: &'a Path,
    pub source_dir: Option<String>,
    pub emit_facts: bool,
}

pub fn scan_project(request: ScanRequest<'_>, args: &OutputArgs) -> Result<ExitCode> {
    let mut config = super::resolve_config(args)?;
    if let Some(source_dir) = request.source_dir {
        config.scan.source_dir = source_dir;
    }

    let modules = ComponentScanner::new(JavaClassFactExtractor::new())
        .with_options(config.scan_options())
        .scan(request.root)
        .with_context(|| format!("Failed to scan {}", request.root.display()))?;
    info!(
        "Scanned {} components in {}",
        modules.len(),
        request.root.display()
    );

    if request.emit_facts {
        std::fs::create_dir_all(&args.output_dir).with_context(|| {
            format!("Failed to create output directory {}", args.output_dir.display())
        })?;
        write_file_with(&args.output_dir.join(FACTS_FILE), |out| {
            write_facts(&modules, out)?;
            Ok(())
        })?;
    }

    super::report_modules(modules, &config, args)
}
