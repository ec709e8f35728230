//! Script channel: install-if-missing and JSON invocation

use serde::Serialize;
use serde_json::Value;

use super::ScriptTransport;
use crate::{Error, Result};

/// RPC-style access to named server-side scripts.
///
/// The channel owns (or borrows, via the blanket impls on references and
/// smart pointers) the transport; consumers such as
/// [`CleanupPolicyRepository`](crate::CleanupPolicyRepository) receive the
/// channel explicitly.
#[derive(Debug, Clone)]
pub struct ScriptChannel<T> {
    transport: T,
}

impl<T: ScriptTransport> ScriptChannel<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Install `content` as script `name` unless a script with that name
    /// already exists. An existing script is never overwritten.
    ///
    /// If the install call fails but the script is present afterwards,
    /// another client won the race and this is treated as success.
    pub fn ensure_installed(&self, name: &str, content: &str) -> Result<()> {
        let exists = self
            .transport
            .script_exists(name)
            .map_err(|source| Error::ScriptInstall {
                name: name.to_string(),
                source,
            })?;

        if exists {
            tracing::debug!(script = name, "Script already installed");
            return Ok(());
        }

        tracing::info!(script = name, "Installing script");
        let Err(source) = self.transport.install_script(name, content) else {
            return Ok(());
        };

        if let Ok(true) = self.transport.script_exists(name) {
            tracing::debug!(script = name, error = %source, "Script installed concurrently");
            return Ok(());
        }

        Err(Error::ScriptInstall {
            name: name.to_string(),
            source,
        })
    }

    /// Run script `name` with `argument` serialized as its JSON payload and
    /// decode the JSON-encoded `result` string of the response.
    ///
    /// Transport failures are surfaced immediately as
    /// [`Error::ScriptInvocation`]; nothing is retried here.
    pub fn invoke<A>(&self, name: &str, argument: &A) -> Result<Value>
    where
        A: Serialize + ?Sized,
    {
        let payload = serde_json::to_string(argument)?;
        tracing::debug!(script = name, bytes = payload.len(), "Running script");

        let response = self
            .transport
            .run_script(name, &payload)
            .map_err(|source| Error::ScriptInvocation {
                name: name.to_string(),
                source,
            })?;

        serde_json::from_str(&response.result).map_err(|e| Error::MalformedScriptResponse {
            name: name.to_string(),
            message: e.to_string(),
        })
    }
}
