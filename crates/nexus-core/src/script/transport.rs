//! Script transport seam

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::sync::Arc;

/// Failure reported by the transport layer (non-2xx status, network error).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}{}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
pub struct TransportError {
    pub status: Option<u16>,
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }
}

/// Envelope returned by a script run.
///
/// `result` holds the script's return value JSON-encoded as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub result: String,
}

/// Script operations offered by the server's REST API.
///
/// Implemented by the HTTP client; authentication, retries and timeouts
/// belong to the implementation.
pub trait ScriptTransport {
    /// Whether a script named `name` is stored on the server.
    fn script_exists(&self, name: &str) -> Result<bool, TransportError>;

    /// Store a script with the given body.
    fn install_script(&self, name: &str, body: &str) -> Result<(), TransportError>;

    /// Run a stored script with `payload` as its argument string.
    fn run_script(&self, name: &str, payload: &str) -> Result<ScriptResponse, TransportError>;
}

impl<T: ScriptTransport + ?Sized> ScriptTransport for &T {
    fn script_exists(&self, name: &str) -> Result<bool, TransportError> {
        (**self).script_exists(name)
    }

    fn install_script(&self, name: &str, body: &str) -> Result<(), TransportError> {
        (**self).install_script(name, body)
    }

    fn run_script(&self, name: &str, payload: &str) -> Result<ScriptResponse, TransportError> {
        (**self).run_script(name, payload)
    }
}

impl<T: ScriptTransport + ?Sized> ScriptTransport for Box<T> {
    fn script_exists(&self, name: &str) -> Result<bool, TransportError> {
        (**self).script_exists(name)
    }

    fn install_script(&self, name: &str, body: &str) -> Result<(), TransportError> {
        (**self).install_script(name, body)
    }

    fn run_script(&self, name: &str, payload: &str) -> Result<ScriptResponse, TransportError> {
        (**self).run_script(name, payload)
    }
}

impl<T: ScriptTransport + ?Sized> ScriptTransport for Rc<T> {
    fn script_exists(&self, name: &str) -> Result<bool, TransportError> {
        (**self).script_exists(name)
    }

    fn install_script(&self, name: &str, body: &str) -> Result<(), TransportError> {
        (**self).install_script(name, body)
    }

    fn run_script(&self, name: &str, payload: &str) -> Result<ScriptResponse, TransportError> {
        (**self).run_script(name, payload)
    }
}

impl<T: ScriptTransport + ?Sized> ScriptTransport for Arc<T> {
    fn script_exists(&self, name: &str) -> Result<bool, TransportError> {
        (**self).script_exists(name)
    }

    fn install_script(&self, name: &str, body: &str) -> Result<(), TransportError> {
        (**self).install_script(name, body)
    }

    fn run_script(&self, name: &str, payload: &str) -> Result<ScriptResponse, TransportError> {
        (**self).run_script(name, payload)
    }
}
