//! # Dispatch Errors
//!
//! One enum per failure family. Each carries exactly one [`ErrorCode`], which
//! becomes the caller-visible [`ErrorResponse`] at the boundary.

use crate::error::{ErrorCode, ErrorResponse};
use crate::model::Action;
use crate::permission::PermissionError;
use crate::store::StoreError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DispatchError {
    /// The identifier itself is unusable.
    #[error("Addressing error: {0}")]
    Addressing(ErrorCode),

    #[error("Actor may not {action} {identifier}")]
    NotAllowed { identifier: String, action: Action },

    /// Unknown action, missing parameter or wrong resource shape.
    #[error("Validation error: {0}")]
    Validation(ErrorCode),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Gate(#[from] PermissionError),
}

impl DispatchError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DispatchError::Addressing(code) | DispatchError::Validation(code) => *code,
            DispatchError::NotAllowed { .. } => ErrorCode::NotAllowed,
            DispatchError::Store(e) => e.code(),
            DispatchError::Gate(e) => e.code(),
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        self.code().response()
    }
}

impl From<DispatchError> for ErrorResponse {
    fn from(error: DispatchError) -> Self {
        error.to_response()
    }
}
