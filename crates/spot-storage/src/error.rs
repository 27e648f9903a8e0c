//! Error types for storage and configuration
//!
//! Every variant that touches the filesystem carries the path involved.

use std::path::{Path, PathBuf};

/// Storage failure
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing a file failed
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid JSON for the expected shape
    #[error("malformed json in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Well-formed data that violates a model constraint
    #[error("data conversion failed: {0}")]
    DataConversion(String),

    /// Configuration file could not be read or parsed
    #[error("invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl StorageError {
    /// Create IO error for path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Classify a JSON error for path
    ///
    /// Syntax and EOF errors stay [`StorageError::Json`]; values rejected by
    /// field validation become [`StorageError::DataConversion`].
    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        if source.is_data() {
            Self::DataConversion(format!("{}: {source}", path.display()))
        } else {
            Self::Json {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Create config error for path
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
