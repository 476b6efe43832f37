//! # Permission Gate
//!
//! Asked once per request, after parameters have been validated and before the
//! store is touched. The gate answers `true` (allowed), `false` (denied), or
//! rejects with a [`PermissionError`].
//!
//! The router never interprets actors itself; it hands the identifier, the actor
//! and the action name to the gate and acts on the answer.

pub mod mock;

use crate::error::ErrorCode;
use crate::model::{Action, ActorId};
use async_trait::async_trait;

/// Failures of the permission engine itself, as opposed to a plain denial.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PermissionError {
    /// The engine rejected the check with a symbolic reason.
    #[error("Permission check rejected: {0}")]
    Rejected(String),
    #[error("Permission engine unavailable: {0}")]
    Unavailable(String),
}

impl PermissionError {
    /// Known symbols are kept; anything else is a server error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PermissionError::Rejected(symbol) => {
                ErrorCode::from_symbol(symbol).unwrap_or(ErrorCode::DefaultServerError)
            }
            PermissionError::Unavailable(_) => ErrorCode::DefaultServerError,
        }
    }
}

/// Decides whether an actor may perform an action on an identifier.
#[async_trait]
pub trait PermissionGate: Send + Sync + 'static {
    async fn verify(
        &self,
        identifier: &str,
        actor: Option<&ActorId>,
        action: Action,
    ) -> Result<bool, PermissionError>;
}

/// Allows everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

#[async_trait]
impl PermissionGate for AllowAll {
    async fn verify(&self, _: &str, _: Option<&ActorId>, _: Action) -> Result<bool, PermissionError> {
        Ok(true)
    }
}

/// Denies everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

#[async_trait]
impl PermissionGate for DenyAll {
    async fn verify(&self, _: &str, _: Option<&ActorId>, _: Action) -> Result<bool, PermissionError> {
        Ok(false)
    }
}
