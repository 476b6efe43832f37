//! # Store Messages
//!
//! The message form of every [`DataStore`](crate::store::DataStore) call, sent from
//! the [`StoreClient`](crate::store::StoreClient) to the
//! [`StoreActor`](crate::store::StoreActor).

use crate::model::{Action, ActorId, BulkResources, ResourceKind};
use crate::store::error::StoreError;
use serde_json::Value;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Payload returned by a store. The router never inspects it.
pub type StorePayload = Value;

/// What `create` should make.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateParams {
    pub content: Option<String>,
    pub name: Option<String>,
    pub kind: ResourceKind,
}

/// One store call with its arguments.
///
/// Variants map one-to-one onto [`Action`]s, so tests can assert on exactly what
/// the dispatcher delegated.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreOperation {
    Read {
        id: String,
        flags: Vec<String>,
    },
    Alias {
        id: String,
    },
    Search {
        id: String,
        query: String,
        sorting: Option<String>,
        flags: Vec<String>,
    },
    Inspect {
        id: String,
        fields: Option<Vec<String>>,
    },
    Download {
        id: String,
        format: String,
    },
    Create {
        id: String,
        params: CreateParams,
        flags: Vec<String>,
    },
    Bulk {
        id: String,
        resources: BulkResources,
        flags: Vec<String>,
    },
    Copy {
        id: String,
        destination: String,
        flags: Vec<String>,
    },
    Update {
        id: String,
        content: String,
        flags: Vec<String>,
    },
    Move {
        id: String,
        destination: String,
        flags: Vec<String>,
    },
    Rename {
        id: String,
        name: String,
        flags: Vec<String>,
    },
    Destroy {
        id: String,
    },
}

impl StoreOperation {
    /// The identifier the operation targets.
    pub fn id(&self) -> &str {
        match self {
            StoreOperation::Read { id, .. }
            | StoreOperation::Alias { id }
            | StoreOperation::Search { id, .. }
            | StoreOperation::Inspect { id, .. }
            | StoreOperation::Download { id, .. }
            | StoreOperation::Create { id, .. }
            | StoreOperation::Bulk { id, .. }
            | StoreOperation::Copy { id, .. }
            | StoreOperation::Update { id, .. }
            | StoreOperation::Move { id, .. }
            | StoreOperation::Rename { id, .. }
            | StoreOperation::Destroy { id } => id,
        }
    }

    /// The action this operation performs.
    pub fn action(&self) -> Action {
        match self {
            StoreOperation::Read { .. } => Action::Read,
            StoreOperation::Alias { .. } => Action::Alias,
            StoreOperation::Search { .. } => Action::Search,
            StoreOperation::Inspect { .. } => Action::Inspect,
            StoreOperation::Download { .. } => Action::Download,
            StoreOperation::Create { .. } => Action::Create,
            StoreOperation::Bulk { .. } => Action::Bulk,
            StoreOperation::Copy { .. } => Action::Copy,
            StoreOperation::Update { .. } => Action::Update,
            StoreOperation::Move { .. } => Action::Move,
            StoreOperation::Rename { .. } => Action::Rename,
            StoreOperation::Destroy { .. } => Action::Destroy,
        }
    }
}

/// A store call in flight: the operation, who asked, and where to answer.
#[derive(Debug)]
pub struct StoreRequest {
    pub operation: StoreOperation,
    pub actor: Option<ActorId>,
    pub respond_to: Response<StorePayload>,
}
