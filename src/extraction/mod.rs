//! Turning source files into [`ClassFact`]s.
//!
//! Extraction is the boundary of the tool: the metrics only ever see class
//! facts, never source text.

pub mod java;
pub mod scan;

pub use java::JavaClassFactExtractor;
pub use scan::{ComponentScanner, ScanOptions};

use crate::core::{ClassFact, Error, Result};
use std::path::Path;

/// Produces the class facts declared in one source file.
pub trait ClassFactExtractor: Send + Sync {
    /// Facts for every type declared in `content`.
    fn extract_source(&self, content: &str) -> Vec<ClassFact>;

    fn extract(&self, path: &Path) -> Result<Vec<ClassFact>> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::extraction(path, e.to_string()))?;
        Ok(self.extract_source(&content))
    }
}
