//! Error types for dictionary loading.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a whole dictionary load.
///
/// Per-file problems (a dictionary file that does not parse, a missing or
/// malformed config) never surface here: they are logged and skipped.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The project root does not exist or is not a directory.
    #[error("Project root not found: {}", .0.display())]
    ProjectRootNotFound(PathBuf),

    /// A glob pattern from `paths` is not a valid pattern.
    #[error("Invalid path pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Walking the project tree for a glob pattern failed.
    #[error("Failed to expand '{pattern}': {source}")]
    Expand {
        pattern: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error outside of per-file reads.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoadError {
    /// Create an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }
}
