//! Shared error types for the library

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for stabilitymap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A component without classes was handed to the core
    #[error("Invalid component input: component '{component}' has no classes")]
    InvalidComponentInput { component: String },

    /// The same component name was supplied twice
    #[error("Invalid component input: component name '{component}' is not unique")]
    DuplicateComponentName { component: String },

    /// Class facts could not be extracted from a source file
    #[error("Extraction error in {}: {message}", path.display())]
    Extraction { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an extraction error for a source file
    pub fn extraction(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Extraction {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
