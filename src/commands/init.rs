use crate::config::{StabilityConfig, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const HEADER: &str = "# stabilitymap configuration\n\n";

pub fn init_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let body = toml::to_string_pretty(&StabilityConfig::default())
        .context("Failed to serialize default configuration")?;
    std::fs::write(&config_path, format!("{HEADER}{body}"))
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created {} configuration file", config_path.display());

    Ok(config_path)
}
