//! Error types for nexus-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from nexus-core
    #[error(transparent)]
    Core(#[from] nexus_core::Error),

    /// Error from nexus-fs
    #[error(transparent)]
    Fs(#[from] nexus_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Output serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

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

    /// Process exit status for this error; each error kind gets its own.
    pub fn exit_code(&self) -> i32 {
        use nexus_core::Error as Core;

        match self {
            Self::Core(Core::InvalidRepositoryPath { .. }) => 2,
            Self::Core(
                Core::ScriptInvocation { .. }
                | Core::ScriptInstall { .. }
                | Core::MalformedScriptResponse { .. },
            ) => 3,
            Self::Core(Core::CreateCleanupPolicy { .. }) => 4,
            Self::Core(Core::InvalidCleanupPolicy { .. }) => 5,
            Self::Core(Core::Fs(_)) | Self::Fs(_) | Self::Io(_) => 6,
            Self::User { .. } => 7,
            Self::Core(Core::Json(_)) | Self::Json(_) => 1,
        }
    }
}
