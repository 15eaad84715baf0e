use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::StabilityConfig;
use crate::core::{Error, Result};
use tracing::{debug, warn};

pub const CONFIG_FILE_NAME: &str = ".stabilitymap.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<StabilityConfig, String> {
    let config = toml::from_str::<StabilityConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))?;
    config.validate()?;
    Ok(config)
}

/// Load an explicitly requested config file. Unlike discovery, a missing or
/// invalid file is an error.
pub fn load_config_file(path: &Path) -> Result<StabilityConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::Configuration(format!("Failed to read {}: {e}", path.display()))
    })?;
    let config = parse_and_validate_config(&contents).map_err(Error::Configuration)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

fn try_load_config_from_path(config_path: &Path) -> Option<StabilityConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to read config file {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// `start` and its ancestors, nearest first, at most `max_depth` directories.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Nearest `.stabilitymap.toml` at or above `start`, or defaults.
pub fn load_config_from(start: &Path) -> StabilityConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            StabilityConfig::default()
        })
}

pub fn load_config() -> StabilityConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(&dir),
        Err(e) => {
            warn!("Failed to get current directory: {}. Using default config.", e);
            StabilityConfig::default()
        }
    }
}
