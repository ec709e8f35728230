//! Core of the Nexus 3 client
//!
//! This crate holds the logic that sits between the command-line surface and
//! the HTTP transport:
//!
//! - **Path resolution**: turn `repository/dir/subdir/file` strings into a
//!   [`ComponentLocation`]
//! - **Artifact filtering**: lazily select listing records by path prefix or
//!   exact path, across paginated responses
//! - **Sync decisions**: compare local content against advertised checksums
//!   and plan idempotent downloads
//! - **Script channel**: install-if-missing and invoke server-side scripts
//!   with JSON framing
//! - **Cleanup policies**: create/update and look up policies through the
//!   script channel
//!
//! # Architecture
//!
//! ```text
//!                 CLI / sync callers
//!                        |
//!                    nexus-core
//!        +-------+-------+-------+----------------+
//!        |       |       |       |                |
//!      path  artifact  sync   script -> cleanup_policy
//!                        |       |
//!                    nexus-fs  ScriptTransport (HTTP layer)
//! ```

pub mod artifact;
pub mod cleanup_policy;
pub mod error;
pub mod path;
pub mod script;
pub mod sync;

pub use artifact::{ArtifactFilter, ArtifactRecord, Filtered, Paginator, SearchPage};
pub use cleanup_policy::{CLEANUP_POLICY_SCRIPT, CleanupCriteria, CleanupPolicy, CleanupPolicyRepository};
pub use error::{Error, Result};
pub use path::{ComponentLocation, REMOTE_PATH_SEPARATOR, split_component_path};
pub use script::{ScriptCatalog, ScriptChannel, ScriptResponse, ScriptTransport, TransportError};
pub use sync::{SyncAction, SyncDecision, SyncPlan, SyncPlanner, TransferReason, same_content};
