//! Error types for profile loading and saving.

use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when loading or saving game state.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A profile file could not be read or written.
    #[error("cannot access profile {path}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A profile file is not valid JSON for the expected shape.
    #[error("invalid profile: {0}")]
    Json(#[from] serde_json::Error),
}
