//! # DataStore Trait
//!
//! The contract a storage backend implements to be driven by the
//! [`StoreActor`](crate::store::StoreActor). The router never implements real
//! storage; it only calls these operations after a request has been validated
//! and authorized.
//!
//! Every operation receives the target identifier and the optional actor, and
//! either returns an opaque payload or rejects with a symbolic [`ErrorCode`].
//!
//! The actor owns its store exclusively, so methods take `&mut self` and need no
//! internal locking.

use crate::error::ErrorCode;
use crate::model::{ActorId, BulkResources};
use crate::store::message::{CreateParams, StorePayload};
use async_trait::async_trait;

/// Result of a store operation.
pub type StoreResult<T = StorePayload> = Result<T, ErrorCode>;

/// Storage backend driven by the store actor.
#[async_trait]
pub trait DataStore: Send + 'static {
    async fn read(&mut self, id: &str, actor: Option<&ActorId>, flags: &[String]) -> StoreResult;

    /// Resolves an alias to the identifier it points at.
    async fn alias(&mut self, id: &str, actor: Option<&ActorId>) -> StoreResult<String>;

    async fn search(
        &mut self,
        id: &str,
        actor: Option<&ActorId>,
        query: &str,
        sorting: Option<&str>,
        flags: &[String],
    ) -> StoreResult;

    async fn inspect(
        &mut self,
        id: &str,
        actor: Option<&ActorId>,
        fields: Option<&[String]>,
    ) -> StoreResult;

    async fn download(&mut self, id: &str, actor: Option<&ActorId>, format: &str) -> StoreResult;

    async fn create(
        &mut self,
        id: &str,
        actor: Option<&ActorId>,
        params: &CreateParams,
        flags: &[String],
    ) -> StoreResult;

    async fn bulk(
        &mut self,
        id: &str,
        actor: Option<&ActorId>,
        resources: &BulkResources,
        flags: &[String],
    ) -> StoreResult;

    async fn copy(
        &mut self,
        id: &str,
        actor: Option<&ActorId>,
        destination: &str,
        flags: &[String],
    ) -> StoreResult;

    async fn update(
        &mut self,
        id: &str,
        actor: Option<&ActorId>,
        content: &str,
        flags: &[String],
    ) -> StoreResult;

    /// Moves a resource; `move` itself is a keyword.
    async fn move_to(
        &mut self,
        id: &str,
        actor: Option<&ActorId>,
        destination: &str,
        flags: &[String],
    ) -> StoreResult;

    async fn rename(
        &mut self,
        id: &str,
        actor: Option<&ActorId>,
        name: &str,
        flags: &[String],
    ) -> StoreResult;

    async fn destroy(&mut self, id: &str, actor: Option<&ActorId>) -> StoreResult;
}

/// A store that rejects every operation with `NOT_IMPLEMENTED`.
///
/// Stands in until a real backend is wired into the router.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedStore;

#[async_trait]
impl DataStore for UnimplementedStore {
    async fn read(&mut self, _: &str, _: Option<&ActorId>, _: &[String]) -> StoreResult {
        Err(ErrorCode::NotImplemented)
    }

    async fn alias(&mut self, _: &str, _: Option<&ActorId>) -> StoreResult<String> {
        Err(ErrorCode::NotImplemented)
    }

    async fn search(
        &mut self,
        _: &str,
        _: Option<&ActorId>,
        _: &str,
        _: Option<&str>,
        _: &[String],
    ) -> StoreResult {
        Err(ErrorCode::NotImplemented)
    }

    async fn inspect(&mut self, _: &str, _: Option<&ActorId>, _: Option<&[String]>) -> StoreResult {
        Err(ErrorCode::NotImplemented)
    }

    async fn download(&mut self, _: &str, _: Option<&ActorId>, _: &str) -> StoreResult {
        Err(ErrorCode::NotImplemented)
    }

    async fn create(
        &mut self,
        _: &str,
        _: Option<&ActorId>,
        _: &CreateParams,
        _: &[String],
    ) -> StoreResult {
        Err(ErrorCode::NotImplemented)
    }

    async fn bulk(
        &mut self,
        _: &str,
        _: Option<&ActorId>,
        _: &BulkResources,
        _: &[String],
    ) -> StoreResult {
        Err(ErrorCode::NotImplemented)
    }

    async fn copy(&mut self, _: &str, _: Option<&ActorId>, _: &str, _: &[String]) -> StoreResult {
        Err(ErrorCode::NotImplemented)
    }

    async fn update(&mut self, _: &str, _: Option<&ActorId>, _: &str, _: &[String]) -> StoreResult {
        Err(ErrorCode::NotImplemented)
    }

    async fn move_to(&mut self, _: &str, _: Option<&ActorId>, _: &str, _: &[String]) -> StoreResult {
        Err(ErrorCode::NotImplemented)
    }

    async fn rename(&mut self, _: &str, _: Option<&ActorId>, _: &str, _: &[String]) -> StoreResult {
        Err(ErrorCode::NotImplemented)
    }

    async fn destroy(&mut self, _: &str, _: Option<&ActorId>) -> StoreResult {
        Err(ErrorCode::NotImplemented)
    }
}
