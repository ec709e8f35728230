//! Emulation of the cleanup-policy script.

use nexus_core::TransportError;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Policies kept by the emulated script, shared with the test.
///
/// A payload holding only `name` is a lookup; anything else is stored
/// (replacing a policy of the same name) and echoed back.
#[derive(Debug, Clone, Default)]
pub struct PolicyStore {
    policies: Rc<RefCell<BTreeMap<String, Value>>>,
}

impl PolicyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a stored policy.
    pub fn insert(&self, policy: Value) {
        if let Some(name) = policy.get("name").and_then(Value::as_str) {
            self.policies.borrow_mut().insert(name.to_string(), policy.clone());
        }
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.policies.borrow().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.policies.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A script handler backed by this store.
    pub fn handler(&self) -> impl FnMut(&str) -> Result<String, TransportError> + 'static {
        let policies = Rc::clone(&self.policies);
        move |payload| {
            let request: Map<String, Value> = serde_json::from_str(payload)
                .map_err(|e| TransportError::with_status(400, e.to_string()))?;
            let name = request
                .get("name")
                .and_then(Value::as_str)
                .ok_or_else(|| TransportError::with_status(400, "missing name"))?
                .to_string();

            let mut policies = policies.borrow_mut();
            let policy = if request.len() == 1 {
                policies
                    .get(&name)
                    .cloned()
                    .ok_or_else(|| TransportError::with_status(400, format!("no cleanup policy named {name}")))?
            } else {
                let policy = Value::Object(request);
                policies.insert(name, policy.clone());
                policy
            };

            Ok(policy.to_string())
        }
    }
}
