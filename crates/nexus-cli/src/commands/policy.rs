//! Cleanup policy commands

use std::path::Path;

use nexus_core::CleanupPolicy;
use nexus_fs::ConfigStore;

use crate::error::{CliError, Result};

/// Run the policy render command
pub fn run_policy_render(policy_file: &Path) -> Result<()> {
    let policy = load_policy(policy_file)?;
    println!("{}", serde_json::to_string_pretty(&policy)?);
    Ok(())
}

/// Load and check a policy definition file.
fn load_policy(policy_file: &Path) -> Result<CleanupPolicy> {
    let policy: CleanupPolicy = ConfigStore::new().load(policy_file)?;
    if policy.name.trim().is_empty() {
        return Err(CliError::user(format!(
            "Policy in {} has an empty name",
            policy_file.display()
        )));
    }
    Ok(policy)
}
