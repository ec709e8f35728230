//! Error types for nexus-core

use crate::script::TransportError;

/// Result type for nexus-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in nexus-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote path has no usable repository segment
    #[error("The given path does not contain a repository: {path}")]
    InvalidRepositoryPath { path: String },

    /// Running a server-side script failed at the transport level
    #[error("Failed to run script '{name}': {source}")]
    ScriptInvocation {
        name: String,
        #[source]
        source: TransportError,
    },

    /// Installing a server-side script failed and the script is still absent
    #[error("Failed to install script '{name}': {source}")]
    ScriptInstall {
        name: String,
        #[source]
        source: TransportError,
    },

    /// The script ran but its `result` could not be decoded
    #[error("Script '{name}' returned a malformed result: {message}")]
    MalformedScriptResponse { name: String, message: String },

    /// Create-or-update failed or targeted a different policy
    #[error("Failed to create or update cleanup policy: {name}")]
    CreateCleanupPolicy { name: String },

    /// Lookup failed; the policy is absent or the script errored
    #[error("Invalid or missing cleanup policy: {name}")]
    InvalidCleanupPolicy { name: String },

    // Transparent wrappers for underlying crate errors
    /// Local filesystem error from nexus-fs
    #[error(transparent)]
    Fs(#[from] nexus_fs::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
