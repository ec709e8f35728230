//! Cleanup policies managed through a server-side script

mod model;
mod repository;

pub use model::{CleanupCriteria, CleanupPolicy};
pub use repository::{CLEANUP_POLICY_SCRIPT, CleanupPolicyRepository};
