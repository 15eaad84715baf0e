//! Directory layout to component mapping.
//!
//! Each immediate sub-directory of the scan root is one component, named after
//! the directory. Sources are read from `<component>/<source_dir>` when that
//! directory exists and from the component directory itself otherwise. A root
//! without sub-directories is a single component named after the root.

use super::ClassFactExtractor;
use crate::core::{ClassFact, Error, ModuleSource, Result, ResultExt};
use crate::io::walker::SourceWalker;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub source_dir: String,
    pub extensions: Vec<String>,
    pub exclude_files: Vec<String>,
    pub parallel: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            source_dir: "src/main/java".to_string(),
            extensions: vec!["java".to_string()],
            exclude_files: vec!["package-info.java".to_string()],
            parallel: true,
        }
    }
}

pub struct ComponentScanner<E> {
    extractor: E,
    options: ScanOptions,
}

impl<E: ClassFactExtractor> ComponentScanner<E> {
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            options: ScanOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// One module per component directory, sorted by name. Directories
    /// without any declared type are skipped.
    pub fn scan(&self, root: &Path) -> Result<Vec<ModuleSource>> {
        if !root.is_dir() {
            return Err(Error::extraction(root, "scan root is not a directory"));
        }

        let mut component_dirs = component_dirs(root)?;
        if component_dirs.is_empty() {
            let name = root
                .canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
                .unwrap_or_else(|| root.display().to_string());
            component_dirs.push((name, root.to_path_buf()));
        }

        let mut modules = Vec::with_capacity(component_dirs.len());
        for (name, dir) in component_dirs {
            let module = self.scan_component(&name, &dir)?;
            if module.is_empty() {
                debug!("Skipping component {} without classes", name);
                continue;
            }
            info!(
                "Component {} has {} classes ({} abstract)",
                name,
                module.num_classes(),
                module.num_abstract_classes()
            );
            modules.push(module);
        }

        Ok(modules)
    }

    /// Facts for one component directory.
    pub fn scan_component(&self, name: &str, dir: &Path) -> Result<ModuleSource> {
        let nested = dir.join(&self.options.source_dir);
        let base = if nested.is_dir() { nested } else { dir.to_path_buf() };
        debug!("Scanning component {} in {}", name, base.display());

        let files = SourceWalker::new(base)
            .with_extensions(self.options.extensions.clone())
            .with_excluded_names(self.options.exclude_files.clone())
            .walk()
            .context(format!("Failed to list sources of component {name}"))?;

        let per_file: Vec<Vec<ClassFact>> = if self.options.parallel {
            files
                .par_iter()
                .map(|f| self.extractor.extract(f))
                .collect::<Result<_>>()?
        } else {
            files
                .iter()
                .map(|f| self.extractor.extract(f))
                .collect::<Result<_>>()?
        };

        Ok(ModuleSource::new(
            name,
            per_file.into_iter().flatten().collect(),
        ))
    }
}

/// Visible immediate sub-directories of `root`, sorted by name.
fn component_dirs(root: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() && !name.starts_with('.') {
            dirs.push((name, path));
        }
    }
    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::JavaClassFactExtractor;
    use std::fs;
    use tempfile::TempDir;

    fn write(path: PathBuf, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_each_subdirectory_is_a_component() {
        let root = TempDir::new().unwrap();
        write(
            root.path().join("web/src/main/java/w/Controller.java"),
            "package w; import c.Service; class Controller {}",
        );
        write(
            root.path().join("core/src/main/java/c/Service.java"),
            "package c; public interface Service {}",
        );
        write(
            root.path().join("core/src/main/java/c/package-info.java"),
            "package c;",
        );
        fs::create_dir_all(root.path().join("docs")).unwrap();

        let modules = ComponentScanner::new(JavaClassFactExtractor::new())
            .scan(root.path())
            .unwrap();

        let names: Vec<&str> = modules.iter().map(ModuleSource::name).collect();
        assert_eq!(names, vec!["core", "web"]);
        assert_eq!(modules[0].num_abstract_classes(), 1);
        assert!(modules[1].any_imports("c.Service"));
    }

    #[test]
    fn test_component_without_nested_source_dir() {
        let root = TempDir::new().unwrap();
        write(root.path().join("lib/a/A.java"), "package a; class A {}");

        let scanner = ComponentScanner::new(JavaClassFactExtractor::new()).with_options(ScanOptions {
            parallel: false,
            ..ScanOptions::default()
        });
        let modules = scanner.scan(root.path()).unwrap();

        assert_eq!(modules.len(), 1);
        assert!(modules[0].contains_class("a.A"));
    }

    #[test]
    fn test_flat_root_is_single_component() {
        let root = TempDir::new().unwrap();
        write(root.path().join("Only.java"), "class Only {}");

        let modules = ComponentScanner::new(JavaClassFactExtractor::new())
            .scan(root.path())
            .unwrap();

        assert_eq!(modules.len(), 1);
        assert!(modules[0].contains_class("Only"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let root = TempDir::new().unwrap();
        let result =
            ComponentScanner::new(JavaClassFactExtractor::new()).scan(&root.path().join("nope"));

        assert!(matches!(result, Err(Error::Extraction { .. })));
    }
}
