use crate::core::{Error, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Collects source files below a root directory.
pub struct SourceWalker {
    root: PathBuf,
    extensions: Vec<String>,
    excluded_names: Vec<String>,
}

impl SourceWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extensions: vec!["java".to_string()],
            excluded_names: vec![],
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    /// File names (not paths) that are never collected, e.g. `package-info.java`.
    pub fn with_excluded_names(mut self, names: Vec<String>) -> Self {
        self.excluded_names = names;
        self
    }

    /// Matching files, sorted by path.
    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .sort_by_file_path(|a, b| a.cmp(b))
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| Error::extraction(&self.root, e.to_string()))?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = ext.to_string_lossy();
        if !self.extensions.iter().any(|e| e.as_str() == ext) {
            return false;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        !self.excluded_names.iter().any(|x| x.as_str() == name)
    }
}

pub fn find_source_files(root: &Path, extensions: Vec<String>) -> Result<Vec<PathBuf>> {
    SourceWalker::new(root.to_path_buf())
        .with_extensions(extensions)
        .walk()
}
