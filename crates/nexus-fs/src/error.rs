//! Error types for nexus-fs

use std::path::PathBuf;

/// Result type for nexus-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in nexus-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read local source: {0}")]
    Stream(#[source] std::io::Error),

    #[error("Failed to parse {format} file at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported file format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Unknown hash algorithm: {name}")]
    UnknownHashAlgorithm { name: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
