//! In-memory stand-in for the server's script API.

use nexus_core::{ScriptResponse, ScriptTransport, TransportError};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

type Handler = Box<dyn FnMut(&str) -> Result<String, TransportError>>;

/// A recorded transport call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCall {
    Exists(String),
    Install(String),
    Run { name: String, payload: String },
}

/// Script store held in memory.
///
/// Installed scripts are kept by name. Running a script dispatches to the
/// handler registered for that name, whose return value is placed in the
/// response's `result` field verbatim (so handlers return JSON-encoded
/// text). Every call is recorded for later assertions.
#[derive(Default)]
pub struct MemoryScriptServer {
    scripts: RefCell<BTreeMap<String, String>>,
    handlers: RefCell<BTreeMap<String, Handler>>,
    calls: RefCell<Vec<ScriptCall>>,
    failing_runs: RefCell<HashSet<String>>,
    racing_installs: RefCell<HashSet<String>>,
    rejected_installs: RefCell<HashSet<String>>,
}

impl MemoryScriptServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-install a script body.
    pub fn with_script(self, name: &str, body: &str) -> Self {
        self.scripts.borrow_mut().insert(name.to_string(), body.to_string());
        self
    }

    /// Register how runs of `name` respond.
    pub fn with_handler<F>(self, name: &str, handler: F) -> Self
    where
        F: FnMut(&str) -> Result<String, TransportError> + 'static,
    {
        self.handlers.borrow_mut().insert(name.to_string(), Box::new(handler));
        self
    }

    /// Make every run of `name` fail with HTTP 500.
    pub fn failing_runs(self, name: &str) -> Self {
        self.failing_runs.borrow_mut().insert(name.to_string());
        self
    }

    /// Simulate another client installing `name` between our existence
    /// check and our install: the install call fails but the script ends
    /// up present.
    pub fn racing_install(self, name: &str) -> Self {
        self.racing_installs.borrow_mut().insert(name.to_string());
        self
    }

    /// Make installs of `name` fail and leave it absent.
    pub fn rejecting_install(self, name: &str) -> Self {
        self.rejected_installs.borrow_mut().insert(name.to_string());
        self
    }

    /// Body of an installed script.
    pub fn script(&self, name: &str) -> Option<String> {
        self.scripts.borrow().get(name).cloned()
    }

    pub fn calls(&self) -> Vec<ScriptCall> {
        self.calls.borrow().clone()
    }

    /// Number of install calls made for `name`.
    pub fn install_count(&self, name: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, ScriptCall::Install(n) if n == name))
            .count()
    }

    /// Payloads sent to `name`, in order.
    pub fn payloads(&self, name: &str) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                ScriptCall::Run { name: n, payload } if n == name => Some(payload.clone()),
                _ => None,
            })
            .collect()
    }
}

impl ScriptTransport for MemoryScriptServer {
    fn script_exists(&self, name: &str) -> Result<bool, TransportError> {
        self.calls.borrow_mut().push(ScriptCall::Exists(name.to_string()));
        Ok(self.scripts.borrow().contains_key(name))
    }

    fn install_script(&self, name: &str, body: &str) -> Result<(), TransportError> {
        self.calls.borrow_mut().push(ScriptCall::Install(name.to_string()));

        if self.rejected_installs.borrow().contains(name) {
            return Err(TransportError::with_status(403, "install rejected"));
        }
        if self.racing_installs.borrow().contains(name) {
            self.scripts
                .borrow_mut()
                .insert(name.to_string(), "installed by another client".to_string());
            return Err(TransportError::with_status(400, "script already exists"));
        }

        let mut scripts = self.scripts.borrow_mut();
        if scripts.contains_key(name) {
            return Err(TransportError::with_status(400, "script already exists"));
        }
        scripts.insert(name.to_string(), body.to_string());
        Ok(())
    }

    fn run_script(&self, name: &str, payload: &str) -> Result<ScriptResponse, TransportError> {
        self.calls.borrow_mut().push(ScriptCall::Run {
            name: name.to_string(),
            payload: payload.to_string(),
        });

        if !self.scripts.borrow().contains_key(name) {
            return Err(TransportError::with_status(404, format!("script {name} not found")));
        }
        if self.failing_runs.borrow().contains(name) {
            return Err(TransportError::with_status(500, "script execution failed"));
        }

        let mut handlers = self.handlers.borrow_mut();
        let result = match handlers.get_mut(name) {
            Some(handler) => handler(payload)?,
            None => "null".to_string(),
        };

        Ok(ScriptResponse {
            name: Some(name.to_string()),
            result,
        })
    }
}
