//! Error types for graph serialization

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while writing a graph
#[derive(Error, Debug)]
pub enum FormatError {
    /// Filesystem error on the output path or its directory
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FormatError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        FormatError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type for serialization
pub type Result<T> = std::result::Result<T, FormatError>;
