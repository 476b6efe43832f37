//! A scriptable [`PermissionGate`] for tests.
//!
//! ```rust
//! use resource_router::model::Action;
//! use resource_router::permission::mock::{Decision, MockGate};
//! use resource_router::permission::PermissionGate;
//!
//! #[tokio::main]
//! async fn main() {
//!     let gate = MockGate::allow().on_action(Action::Create, Decision::Deny);
//!
//!     assert_eq!(gate.verify("/a/b.txt", None, Action::Read).await, Ok(true));
//!     assert_eq!(gate.verify("/a/b.txt", None, Action::Create).await, Ok(false));
//!     assert_eq!(gate.calls().len(), 2);
//! }
//! ```

use crate::model::{Action, ActorId};
use crate::permission::{PermissionError, PermissionGate};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// What the mock answers for a check.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Allow,
    Deny,
    /// Reject with a symbolic reason.
    Reject(String),
    Unavailable,
}

/// One recorded `verify` call.
#[derive(Debug, Clone, PartialEq)]
pub struct GateCall {
    pub identifier: String,
    pub actor: Option<ActorId>,
    pub action: Action,
}

/// Answers from per-identifier rules, then per-action rules, then a default.
pub struct MockGate {
    default: Decision,
    by_action: HashMap<Action, Decision>,
    by_identifier: HashMap<String, Decision>,
    calls: Mutex<Vec<GateCall>>,
}

impl MockGate {
    pub fn new(default: Decision) -> Self {
        Self {
            default,
            by_action: HashMap::new(),
            by_identifier: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn allow() -> Self {
        Self::new(Decision::Allow)
    }

    pub fn deny() -> Self {
        Self::new(Decision::Deny)
    }

    pub fn on_action(mut self, action: Action, decision: Decision) -> Self {
        self.by_action.insert(action, decision);
        self
    }

    pub fn on_identifier(mut self, identifier: impl Into<String>, decision: Decision) -> Self {
        self.by_identifier.insert(identifier.into(), decision);
        self
    }

    /// Every check made so far, in order.
    pub fn calls(&self) -> Vec<GateCall> {
        self.calls.lock().unwrap().clone()
    }

    fn decide(&self, identifier: &str, action: Action) -> &Decision {
        self.by_identifier
            .get(identifier)
            .or_else(|| self.by_action.get(&action))
            .unwrap_or(&self.default)
    }
}

#[async_trait]
impl PermissionGate for MockGate {
    async fn verify(
        &self,
        identifier: &str,
        actor: Option<&ActorId>,
        action: Action,
    ) -> Result<bool, PermissionError> {
        self.calls.lock().unwrap().push(GateCall {
            identifier: identifier.to_string(),
            actor: actor.cloned(),
            action,
        });
        match self.decide(identifier, action) {
            Decision::Allow => Ok(true),
            Decision::Deny => Ok(false),
            Decision::Reject(reason) => Err(PermissionError::Rejected(reason.clone())),
            Decision::Unavailable => Err(PermissionError::Unavailable("mock".into())),
        }
    }
}
