use crate::cli::OutputArgs;
use crate::io::facts::{into_module_sources, load_facts};
use anyhow::{Context, Result};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

pub fn analyze_facts(facts_path: &Path, args: &OutputArgs) -> Result<ExitCode> {
    let config = super::resolve_config(args)?;

    let facts = load_facts(facts_path)
        .with_context(|| format!("Failed to load facts from {}", facts_path.display()))?;
    info!("Loaded {} modules from {}", facts.len(), facts_path.display());

    super::report_modules(into_module_sources(facts), &config, args)
}
