//! Cleanup policy create/update and lookup over the script channel

use serde_json::{Value, json};

use super::CleanupPolicy;
use crate::script::{ScriptCatalog, ScriptChannel, ScriptTransport};
use crate::{Error, Result};

/// Name of the server-side script backing cleanup policy operations.
pub const CLEANUP_POLICY_SCRIPT: &str = "nexus3-cli-cleanup-policy";

/// Cleanup policies, using [`CLEANUP_POLICY_SCRIPT`] as the only transport.
pub struct CleanupPolicyRepository<'a, T> {
    channel: &'a ScriptChannel<T>,
}

impl<'a, T: ScriptTransport> CleanupPolicyRepository<'a, T> {
    /// Bind to `channel`, installing the policy script if it is missing.
    pub fn new(channel: &'a ScriptChannel<T>, script_body: &str) -> Result<Self> {
        channel.ensure_installed(CLEANUP_POLICY_SCRIPT, script_body)?;
        Ok(Self { channel })
    }

    /// Like [`new`](Self::new), reading the script body from `catalog`.
    pub fn from_catalog(channel: &'a ScriptChannel<T>, catalog: &ScriptCatalog) -> Result<Self> {
        let body = catalog.load(CLEANUP_POLICY_SCRIPT)?;
        Self::new(channel, &body)
    }

    /// Create `policy`, or update the existing policy with the same name.
    ///
    /// Fails with [`Error::CreateCleanupPolicy`] when the script cannot be
    /// run or reports a different policy name than the one sent.
    pub fn create_or_update(&self, policy: &CleanupPolicy) -> Result<()> {
        let result = self
            .channel
            .invoke(CLEANUP_POLICY_SCRIPT, policy)
            .map_err(|e| {
                tracing::warn!(policy = %policy.name, error = %e, "Cleanup policy script failed");
                Error::CreateCleanupPolicy {
                    name: policy.name.clone(),
                }
            })?;

        match result.get("name").and_then(Value::as_str) {
            Some(name) if name == policy.name => {
                tracing::info!(policy = %policy.name, "Cleanup policy saved");
                Ok(())
            }
            returned => {
                tracing::warn!(
                    policy = %policy.name,
                    returned = ?returned,
                    "Cleanup policy script returned a different policy"
                );
                Err(Error::CreateCleanupPolicy {
                    name: policy.name.clone(),
                })
            }
        }
    }

    /// Look up a policy by name.
    ///
    /// A script failure and an absent policy both surface as
    /// [`Error::InvalidCleanupPolicy`].
    pub fn get_by_name(&self, name: &str) -> Result<CleanupPolicy> {
        let invalid = || Error::InvalidCleanupPolicy {
            name: name.to_string(),
        };

        let result = self
            .channel
            .invoke(CLEANUP_POLICY_SCRIPT, &json!({ "name": name }))
            .map_err(|e| {
                tracing::debug!(policy = name, error = %e, "Cleanup policy lookup failed");
                invalid()
            })?;

        serde_json::from_value(result).map_err(|e| {
            tracing::debug!(policy = name, error = %e, "Cleanup policy result did not decode");
            invalid()
        })
    }
}
