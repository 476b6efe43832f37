//! # Store Errors
//!
//! Failures surfaced by [`StoreClient`](crate::store::StoreClient) calls: either the
//! store actor is gone, or the store itself rejected the operation with a
//! symbolic code.

use crate::error::ErrorCode;

/// Errors returned by store operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Store actor closed")]
    ActorClosed,
    #[error("Store actor dropped response channel")]
    ActorDropped,
    #[error("Store rejected operation: {0}")]
    Rejected(ErrorCode),
    #[error("Unexpected store payload for {0}")]
    UnexpectedPayload(&'static str),
}

impl StoreError {
    /// The symbolic code reported to callers.
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::Rejected(code) => *code,
            StoreError::ActorClosed
            | StoreError::ActorDropped
            | StoreError::UnexpectedPayload(_) => ErrorCode::DefaultServerError,
        }
    }
}
