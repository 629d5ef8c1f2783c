//! Error types for orgsync-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from orgsync-core
    #[error(transparent)]
    Core(#[from] orgsync_core::Error),

    /// I/O error while reading the settings directory
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialized
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Wrap an I/O error with the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
