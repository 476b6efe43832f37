//! # Store Actor
//!
//! The `StoreActor` owns a [`DataStore`] and is the only task that touches it.
//! Requests arrive over an mpsc channel and are executed one at a time; each
//! answer goes back over the request's oneshot channel.
//!
//! Dropping every [`StoreClient`] closes the channel, which ends [`StoreActor::run`].

use crate::model::ActorId;
use crate::store::backend::DataStore;
use crate::store::client::StoreClient;
use crate::store::error::StoreError;
use crate::store::message::{StoreOperation, StorePayload, StoreRequest};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Actor wrapping a storage backend.
///
/// # Usage Pattern
///
/// 1. **Create**: `StoreActor::new()` returns the actor and its client.
/// 2. **Run**: spawn `actor.run()` on the runtime.
/// 3. **Use**: clone the client wherever store access is needed.
///
/// ```rust
/// use resource_router::store::{StoreActor, StoreError, StoreOperation, UnimplementedStore};
/// use resource_router::ErrorCode;
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = StoreActor::new(8, UnimplementedStore);
///     tokio::spawn(actor.run());
///
///     let destroy = StoreOperation::Destroy { id: "/a/b.txt".into() };
///     let result = client.execute(destroy, None).await;
///     assert_eq!(result, Err(StoreError::Rejected(ErrorCode::NotImplemented)));
/// }
/// ```
pub struct StoreActor<S: DataStore> {
    receiver: mpsc::Receiver<StoreRequest>,
    store: S,
}

impl<S: DataStore> StoreActor<S> {
    /// Creates the actor and the client that feeds it.
    ///
    /// `buffer_size` bounds the number of queued requests; senders wait when it is full.
    pub fn new(buffer_size: usize, store: S) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        (actor, StoreClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        // Just the type name (e.g. "UnimplementedStore")
        let store_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(store_type, "Store actor started");

        let mut handled = 0usize;
        while let Some(StoreRequest {
            operation,
            actor,
            respond_to,
        }) = self.receiver.recv().await
        {
            let action = operation.action();
            let id = operation.id().to_string();
            debug!(store_type, %action, %id, ?operation, "Operation");

            let result = self.execute(operation, actor.as_ref()).await;
            handled += 1;
            match &result {
                Ok(_) => info!(store_type, %action, %id, "Operation ok"),
                Err(code) => warn!(store_type, %action, %id, error = %code, "Operation rejected"),
            }
            let _ = respond_to.send(result.map_err(StoreError::Rejected));
        }

        info!(store_type, handled, "Shutdown");
    }

    async fn execute(
        &mut self,
        operation: StoreOperation,
        actor: Option<&ActorId>,
    ) -> Result<StorePayload, crate::ErrorCode> {
        let store = &mut self.store;
        match operation {
            StoreOperation::Read { id, flags } => store.read(&id, actor, &flags).await,
            StoreOperation::Alias { id } => store.alias(&id, actor).await.map(Value::String),
            StoreOperation::Search {
                id,
                query,
                sorting,
                flags,
            } => {
                store
                    .search(&id, actor, &query, sorting.as_deref(), &flags)
                    .await
            }
            StoreOperation::Inspect { id, fields } => {
                store.inspect(&id, actor, fields.as_deref()).await
            }
            StoreOperation::Download { id, format } => store.download(&id, actor, &format).await,
            StoreOperation::Create { id, params, flags } => {
                store.create(&id, actor, &params, &flags).await
            }
            StoreOperation::Bulk {
                id,
                resources,
                flags,
            } => store.bulk(&id, actor, &resources, &flags).await,
            StoreOperation::Copy {
                id,
                destination,
                flags,
            } => store.copy(&id, actor, &destination, &flags).await,
            StoreOperation::Update { id, content, flags } => {
                store.update(&id, actor, &content, &flags).await
            }
            StoreOperation::Move {
                id,
                destination,
                flags,
            } => store.move_to(&id, actor, &destination, &flags).await,
            StoreOperation::Rename { id, name, flags } => {
                store.rename(&id, actor, &name, &flags).await
            }
            StoreOperation::Destroy { id } => store.destroy(&id, actor).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::model::BulkResources;
    use crate::store::backend::{StoreResult, UnimplementedStore};
    use crate::store::message::CreateParams;
    use async_trait::async_trait;
    use serde_json::json;

    /// Echoes each call back as JSON so tests can see what the actor passed through.
    #[derive(Default)]
    struct EchoStore {
        calls: usize,
    }

    impl EchoStore {
        fn echo(&mut self, op: &str, id: &str, actor: Option<&ActorId>, extra: Value) -> StoreResult {
            self.calls += 1;
            Ok(json!({
                "op": op,
                "id": id,
                "actor": actor.map(|a| a.as_str().to_string()),
                "extra": extra,
                "call": self.calls,
            }))
        }
    }

    #[async_trait]
    impl DataStore for EchoStore {
        async fn read(&mut self, id: &str, actor: Option<&ActorId>, flags: &[String]) -> StoreResult {
            self.echo("read", id, actor, json!(flags))
        }
        async fn alias(&mut self, id: &str, _: Option<&ActorId>) -> StoreResult<String> {
            Ok(format!("{id}.target"))
        }
        async fn search(
            &mut self,
            id: &str,
            actor: Option<&ActorId>,
            query: &str,
            sorting: Option<&str>,
            flags: &[String],
        ) -> StoreResult {
            self.echo("search", id, actor, json!([query, sorting, flags]))
        }
        async fn inspect(
            &mut self,
            id: &str,
            actor: Option<&ActorId>,
            fields: Option<&[String]>,
        ) -> StoreResult {
            self.echo("inspect", id, actor, json!(fields))
        }
        async fn download(&mut self, id: &str, actor: Option<&ActorId>, format: &str) -> StoreResult {
            self.echo("download", id, actor, json!(format))
        }
        async fn create(
            &mut self,
            id: &str,
            actor: Option<&ActorId>,
            params: &CreateParams,
            flags: &[String],
        ) -> StoreResult {
            self.echo("create", id, actor, json!([params.content, params.name, flags]))
        }
        async fn bulk(
            &mut self,
            id: &str,
            actor: Option<&ActorId>,
            resources: &BulkResources,
            flags: &[String],
        ) -> StoreResult {
            self.echo("bulk", id, actor, json!([resources, flags]))
        }
        async fn copy(
            &mut self,
            id: &str,
            actor: Option<&ActorId>,
            destination: &str,
            flags: &[String],
        ) -> StoreResult {
            self.echo("copy", id, actor, json!([destination, flags]))
        }
        async fn update(
            &mut self,
            id: &str,
            actor: Option<&ActorId>,
            content: &str,
            flags: &[String],
        ) -> StoreResult {
            self.echo("update", id, actor, json!([content, flags]))
        }
        async fn move_to(
            &mut self,
            id: &str,
            actor: Option<&ActorId>,
            destination: &str,
            flags: &[String],
        ) -> StoreResult {
            self.echo("move", id, actor, json!([destination, flags]))
        }
        async fn rename(
            &mut self,
            id: &str,
            actor: Option<&ActorId>,
            name: &str,
            flags: &[String],
        ) -> StoreResult {
            self.echo("rename", id, actor, json!([name, flags]))
        }
        async fn destroy(&mut self, _: &str, _: Option<&ActorId>) -> StoreResult {
            Err(ErrorCode::ResourceNotFound)
        }
    }

    #[tokio::test]
    async fn actor_routes_operations_to_store() {
        let (actor, client) = StoreActor::new(4, EchoStore::default());
        let handle = tokio::spawn(actor.run());
        let alice = Some(ActorId::new("alice"));

        let search = StoreOperation::Search {
            id: "/a/b/".into(),
            query: "*".into(),
            sorting: None,
            flags: vec!["r".into()],
        };
        let payload = client.execute(search, alice.clone()).await.unwrap();
        assert_eq!(payload["op"], "search");
        assert_eq!(payload["id"], "/a/b/");
        assert_eq!(payload["actor"], "alice");
        assert_eq!(payload["extra"], json!(["*", null, ["r"]]));

        let move_to = StoreOperation::Move {
            id: "/a/b.txt".into(),
            destination: "/c/".into(),
            flags: vec![],
        };
        let payload = client.execute(move_to, None).await.unwrap();
        assert_eq!(payload["op"], "move");
        assert_eq!(payload["actor"], Value::Null);
        assert_eq!(payload["call"], 2);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn alias_resolves_to_identifier() {
        let (actor, client) = StoreActor::new(4, EchoStore::default());
        tokio::spawn(actor.run());

        let resolved = client.alias("/links/report", None).await.unwrap();
        assert_eq!(resolved, "/links/report.target");
    }

    #[tokio::test]
    async fn store_rejection_carries_its_code() {
        let (actor, client) = StoreActor::new(4, EchoStore::default());
        tokio::spawn(actor.run());

        let result = client
            .execute(StoreOperation::Destroy { id: "/gone.txt".into() }, None)
            .await;
        assert_eq!(result, Err(StoreError::Rejected(ErrorCode::ResourceNotFound)));
    }

    #[tokio::test]
    async fn unimplemented_store_rejects_everything() {
        let (actor, client) = StoreActor::new(4, UnimplementedStore);
        tokio::spawn(actor.run());

        let read = client
            .execute(StoreOperation::Read { id: "/a.txt".into(), flags: vec![] }, None)
            .await;
        assert_eq!(read, Err(StoreError::Rejected(ErrorCode::NotImplemented)));
        let alias = client.alias("/a.txt", None).await;
        assert_eq!(alias, Err(StoreError::Rejected(ErrorCode::NotImplemented)));
    }
}
