//! `.stabilitymap.toml` configuration.
//!
//! ```toml
//! detail_components = ["core"]
//! parallel = true
//!
//! [graph]
//! title = "InstabilityDependencyFlow"
//! precision = 3
//! warning_color = "red"
//! compliant_color = "green"
//!
//! [scan]
//! source_dir = "src/main/java"
//! extensions = ["java"]
//! exclude_files = ["package-info.java"]
//! ```

pub mod loader;

pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

use crate::extraction::ScanOptions;
use crate::io::writers::DotConfig;
use serde::{Deserialize, Serialize};

/// Decimal places beyond which labels stop being readable.
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilityConfig {
    /// Components whose violations are reported with class-level detail
    pub detail_components: Vec<String>,
    /// Compute fan-in/fan-out and violations on the rayon pool
    pub parallel: bool,
    pub graph: GraphConfig,
    pub scan: ScanConfig,
}

impl Default for StabilityConfig {
    fn default() -> Self {
        Self {
            detail_components: Vec::new(),
            parallel: true,
            graph: GraphConfig::default(),
            scan: ScanConfig::default(),
        }
    }
}

impl StabilityConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.graph.validate()?;
        self.scan.validate()
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            source_dir: self.scan.source_dir.clone(),
            extensions: self.scan.extensions.clone(),
            exclude_files: self.scan.exclude_files.clone(),
            parallel: self.parallel,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub title: String,
    /// Maximum decimal places of the instability shown in vertex labels
    pub precision: usize,
    pub warning_color: String,
    pub compliant_color: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        let dot = DotConfig::default();
        Self {
            title: dot.title,
            precision: dot.precision,
            warning_color: dot.warning_color,
            compliant_color: dot.compliant_color,
        }
    }
}

impl GraphConfig {
    fn validate(&self) -> Result<(), String> {
        if self.precision > MAX_PRECISION {
            return Err(format!(
                "graph.precision must be at most {MAX_PRECISION}, got {}",
                self.precision
            ));
        }
        if self.warning_color.trim().is_empty() || self.compliant_color.trim().is_empty() {
            return Err("graph colors must not be empty".to_string());
        }
        Ok(())
    }

    pub fn dot_config(&self) -> DotConfig {
        DotConfig {
            title: self.title.clone(),
            precision: self.precision,
            warning_color: self.warning_color.clone(),
            compliant_color: self.compliant_color.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Source root inside each component directory
    pub source_dir: String,
    pub extensions: Vec<String>,
    /// File names that never contribute classes
    pub exclude_files: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        let scan = ScanOptions::default();
        Self {
            source_dir: scan.source_dir,
            extensions: scan.extensions,
            exclude_files: scan.exclude_files,
        }
    }
}

impl ScanConfig {
    fn validate(&self) -> Result<(), String> {
        if self.extensions.is_empty() {
            return Err("scan.extensions must name at least one extension".to_string());
        }
        Ok(())
    }
}
