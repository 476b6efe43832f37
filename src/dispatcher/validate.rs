//! Per-action parameter and structure checks.
//!
//! [`plan`] turns an action, an identifier and the request parameters into the
//! exact [`StoreOperation`] to run, or the single code explaining why it can't.
//! Required parameters are checked before the resource shape.

use crate::config::RouterConfig;
use crate::error::ErrorCode;
use crate::model::{Action, Parameters, ResourceKind};
use crate::path::{self, ResourceShape};
use crate::store::{CreateParams, StoreOperation};

/// A validated request: the action to authorize and the operation to delegate.
///
/// The two differ for a `read` of a container, which is authorized as `read`
/// and delegated as a wildcard `search`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub permission: Action,
    pub operation: StoreOperation,
}

/// Query used when reading a container.
pub const LIST_ALL: &str = "*";

pub fn plan(
    action: Action,
    identifier: &str,
    params: &Parameters,
    config: &RouterConfig,
) -> Result<Plan, ErrorCode> {
    let container = path::classify(identifier)? == ResourceShape::Container;
    let id = identifier.to_string();

    let operation = match action {
        Action::Read if container => StoreOperation::Search {
            id,
            query: LIST_ALL.into(),
            sorting: None,
            flags: params.flags(),
        },
        Action::Read => StoreOperation::Read {
            id,
            flags: params.flags(),
        },
        Action::Alias => StoreOperation::Alias { id },
        Action::Search => {
            let query = required(params.query())?;
            if !container {
                return Err(ErrorCode::InvalidResourceType);
            }
            StoreOperation::Search {
                id,
                query,
                sorting: params.sorting().map(str::to_string),
                flags: params.flags(),
            }
        }
        Action::Inspect => {
            if container {
                return Err(ErrorCode::InvalidResourceType);
            }
            StoreOperation::Inspect {
                id,
                fields: params.fields.clone(),
            }
        }
        Action::Download => StoreOperation::Download {
            id,
            format: config.download_format.clone(),
        },
        Action::Create => StoreOperation::Create {
            id,
            params: create_params(params)?,
            flags: params.flags(),
        },
        Action::Bulk => StoreOperation::Bulk {
            id,
            resources: params.resources.clone().ok_or(ErrorCode::InvalidParameters)?,
            flags: params.flags(),
        },
        Action::Copy => StoreOperation::Copy {
            id,
            destination: required(params.destination())?,
            flags: params.flags(),
        },
        Action::Update => {
            let content = required(params.content())?;
            if container {
                return Err(ErrorCode::InvalidResourceType);
            }
            StoreOperation::Update {
                id,
                content,
                flags: params.flags(),
            }
        }
        Action::Move => StoreOperation::Move {
            id,
            destination: required(params.destination())?,
            flags: params.flags(),
        },
        Action::Rename => StoreOperation::Rename {
            id,
            name: required(params.name())?,
            flags: params.flags(),
        },
        Action::Destroy => StoreOperation::Destroy { id },
    };

    Ok(Plan {
        permission: action,
        operation,
    })
}

fn required(value: Option<&str>) -> Result<String, ErrorCode> {
    value.map(str::to_string).ok_or(ErrorCode::InvalidParameters)
}

/// Content is required unless a folder is requested, and a folder takes none.
fn create_params(params: &Parameters) -> Result<CreateParams, ErrorCode> {
    let requested = params.kind();
    let content = params.content().map(str::to_string);

    match (requested, &content) {
        (Some("folder"), Some(_)) => return Err(ErrorCode::InvalidParameters),
        (Some("folder"), None) => {}
        (_, None) => return Err(ErrorCode::InvalidParameters),
        _ => {}
    }

    let kind = match requested {
        None => ResourceKind::File,
        Some(kind) => ResourceKind::parse(kind).ok_or(ErrorCode::InvalidResourceType)?,
    };

    Ok(CreateParams {
        content,
        name: params.name().map(str::to_string),
        kind,
    })
}
