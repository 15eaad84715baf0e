//! The class facts interchange file.
//!
//! ```json
//! [
//!   {"name": "core", "classes": [
//!     {"qualified_name": "c.Service", "imports": ["java.util.List"], "is_abstract": true}
//!   ]}
//! ]
//! ```
//!
//! Array order defines component order.

use crate::core::{ClassFact, Error, ModuleSource, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleFacts {
    pub name: String,
    #[serde(default)]
    pub classes: Vec<ClassFact>,
}

impl From<&ModuleSource> for ModuleFacts {
    fn from(source: &ModuleSource) -> Self {
        Self {
            name: source.name().to_string(),
            classes: source.classes().to_vec(),
        }
    }
}

pub fn parse_facts(json: &str) -> Result<Vec<ModuleFacts>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_facts(path: &Path) -> Result<Vec<ModuleFacts>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::extraction(path, format!("cannot read facts file: {e}")))?;
    parse_facts(&content).map_err(|e| e.with_context(format!("Invalid facts file {}", path.display())))
}

/// Module sources in file order. Modules without classes are skipped.
pub fn into_module_sources(facts: Vec<ModuleFacts>) -> Vec<ModuleSource> {
    facts
        .into_iter()
        .filter_map(|module| {
            if module.classes.is_empty() {
                debug!("Skipping module {} without classes", module.name);
                return None;
            }
            Some(ModuleSource::new(module.name, module.classes))
        })
        .collect()
}

pub fn write_facts<W: Write>(modules: &[ModuleSource], writer: W) -> Result<()> {
    let facts: Vec<ModuleFacts> = modules.iter().map(ModuleFacts::from).collect();
    serde_json::to_writer_pretty(writer, &facts)?;
    Ok(())
}
