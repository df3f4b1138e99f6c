//! Error types for content loading.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for content operations.
pub type ContentResult<T> = Result<T, ContentError>;

/// Errors raised while loading dialogue content.
///
/// Traversal itself never fails; these only come from reading files.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A content file or directory could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A content file is not valid JSON for a content file.
    #[error("invalid content in {path}: {source}")]
    Parse {
        /// Offending path.
        path: PathBuf,
        /// Underlying parse error.
        source: serde_json::Error,
    },
}
