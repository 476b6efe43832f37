//! # Error Mapping
//!
//! Every failure the router can produce is expressed as one symbolic [`ErrorCode`].
//! The code is mapped to the wire shape ([`ErrorResponse`]) exactly once, at the
//! dispatcher boundary.
//!
//! The symbol table is fixed:
//!
//! | Symbol | Status | Message |
//! |--------|--------|---------|
//! | `NOT_ALLOWED` | 403 | User does not have permission. |
//! | `RESOURCE_NOT_FOUND` | 404 | Resource not found. |
//! | `INVALID_RESOURCE` | 404 | Invalid resource. |
//! | `INVALID_RESOURCE_PATH` | 404 | Invalid path. |
//! | `INVALID_PATH_OR_RESOURCE` | 404 | Invalid path or resource. |
//! | `RESOURCE_EXISTS` | 409 | Requested resource already exists. |
//! | `REQUEST_DATA_TOO_LARGE` | 413 | Request data too large. |
//! | `INVALID_RESOUCE_TYPE` | 415 | Invalid resource type. |
//! | `RESOURCE_FAILED_TO_SAVE` | 500 | Resource failed to save. |
//! | `INVALID_ACTION` | 501 | Invalid action. |
//! | `INVALID_PARAMETERS` | 501 | Invalid parameters. |
//! | `NOT_IMPLEMENTED` | 501 | Not Implemented. |
//! | `DEFAULT_SERVER_ERROR` | 500 | Internal Server Error. Please try again later. |
//!
//! `INVALID_RESOUCE_TYPE` keeps its historical spelling on the wire so existing
//! consumers keep matching on it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic error codes understood by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    NotAllowed,
    ResourceNotFound,
    InvalidResource,
    InvalidResourcePath,
    InvalidPathOrResource,
    ResourceExists,
    RequestDataTooLarge,
    InvalidResourceType,
    ResourceFailedToSave,
    InvalidAction,
    InvalidParameters,
    NotImplemented,
    DefaultServerError,
}

impl ErrorCode {
    /// All codes in table order.
    pub const ALL: [ErrorCode; 13] = [
        ErrorCode::NotAllowed,
        ErrorCode::ResourceNotFound,
        ErrorCode::InvalidResource,
        ErrorCode::InvalidResourcePath,
        ErrorCode::InvalidPathOrResource,
        ErrorCode::ResourceExists,
        ErrorCode::RequestDataTooLarge,
        ErrorCode::InvalidResourceType,
        ErrorCode::ResourceFailedToSave,
        ErrorCode::InvalidAction,
        ErrorCode::InvalidParameters,
        ErrorCode::NotImplemented,
        ErrorCode::DefaultServerError,
    ];

    /// The wire symbol for this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotAllowed => "NOT_ALLOWED",
            ErrorCode::ResourceNotFound => "RESOURCE_NOT_FOUND",
            ErrorCode::InvalidResource => "INVALID_RESOURCE",
            ErrorCode::InvalidResourcePath => "INVALID_RESOURCE_PATH",
            ErrorCode::InvalidPathOrResource => "INVALID_PATH_OR_RESOURCE",
            ErrorCode::ResourceExists => "RESOURCE_EXISTS",
            ErrorCode::RequestDataTooLarge => "REQUEST_DATA_TOO_LARGE",
            ErrorCode::InvalidResourceType => "INVALID_RESOUCE_TYPE",
            ErrorCode::ResourceFailedToSave => "RESOURCE_FAILED_TO_SAVE",
            ErrorCode::InvalidAction => "INVALID_ACTION",
            ErrorCode::InvalidParameters => "INVALID_PARAMETERS",
            ErrorCode::NotImplemented => "NOT_IMPLEMENTED",
            ErrorCode::DefaultServerError => "DEFAULT_SERVER_ERROR",
        }
    }

    /// Looks up a code by its wire symbol.
    ///
    /// Accepts the corrected `INVALID_RESOURCE_TYPE` spelling as an alias.
    pub fn from_symbol(symbol: &str) -> Option<ErrorCode> {
        if symbol == "INVALID_RESOURCE_TYPE" {
            return Some(ErrorCode::InvalidResourceType);
        }
        Self::ALL.iter().copied().find(|code| code.as_str() == symbol)
    }

    /// HTTP-like status code.
    pub fn status(&self) -> u16 {
        match self {
            ErrorCode::NotAllowed => 403,
            ErrorCode::ResourceNotFound
            | ErrorCode::InvalidResource
            | ErrorCode::InvalidResourcePath
            | ErrorCode::InvalidPathOrResource => 404,
            ErrorCode::ResourceExists => 409,
            ErrorCode::RequestDataTooLarge => 413,
            ErrorCode::InvalidResourceType => 415,
            ErrorCode::ResourceFailedToSave | ErrorCode::DefaultServerError => 500,
            ErrorCode::InvalidAction | ErrorCode::InvalidParameters | ErrorCode::NotImplemented => {
                501
            }
        }
    }

    /// Human readable message.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::NotAllowed => "User does not have permission.",
            ErrorCode::ResourceNotFound => "Resource not found.",
            ErrorCode::InvalidResource => "Invalid resource.",
            ErrorCode::InvalidResourcePath => "Invalid path.",
            ErrorCode::InvalidPathOrResource => "Invalid path or resource.",
            ErrorCode::ResourceExists => "Requested resource already exists.",
            ErrorCode::RequestDataTooLarge => "Request data too large.",
            ErrorCode::InvalidResourceType => "Invalid resource type.",
            ErrorCode::ResourceFailedToSave => "Resource failed to save.",
            ErrorCode::InvalidAction => "Invalid action.",
            ErrorCode::InvalidParameters => "Invalid parameters.",
            ErrorCode::NotImplemented => "Not Implemented.",
            ErrorCode::DefaultServerError => "Internal Server Error. Please try again later.",
        }
    }

    /// The wire shape of this code.
    pub fn response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status(),
            message: self.message().to_string(),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for ErrorCode {}

/// The `{status, message}` pair returned to callers on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status, self.message)
    }
}

/// Maps a wire symbol to its response. Unknown symbols map to `DEFAULT_SERVER_ERROR`.
pub fn error_response(symbol: &str) -> ErrorResponse {
    ErrorCode::from_symbol(symbol)
        .unwrap_or(ErrorCode::DefaultServerError)
        .response()
}
