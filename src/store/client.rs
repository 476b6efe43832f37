//! # Store Client
//!
//! Cloneable async handle to a [`StoreActor`](crate::store::StoreActor).

use crate::model::ActorId;
use crate::store::error::StoreError;
use crate::store::message::{StoreOperation, StorePayload, StoreRequest};
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// A type-safe client for the store actor.
///
/// Holds only a sender, so cloning is cheap. [`StoreClient::execute`] carries any
/// [`StoreOperation`]; `alias` additionally unwraps the resolved identifier.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    /// Sends one operation and waits for the answer.
    #[instrument(skip(self, operation), fields(action = %operation.action(), id = operation.id()))]
    pub async fn execute(
        &self,
        operation: StoreOperation,
        actor: Option<ActorId>,
    ) -> Result<StorePayload, StoreError> {
        debug!("Sending request");
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest {
                operation,
                actor,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Resolves an alias to its target identifier.
    pub async fn alias(
        &self,
        id: impl Into<String>,
        actor: Option<ActorId>,
    ) -> Result<String, StoreError> {
        match self
            .execute(StoreOperation::Alias { id: id.into() }, actor)
            .await?
        {
            Value::String(resolved) => Ok(resolved),
            _ => Err(StoreError::UnexpectedPayload("alias")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::store::mock::{create_mock_store, expect_operation};
    use serde_json::json;

    #[tokio::test]
    async fn copy_sends_destination_and_flags() {
        let (client, mut receiver) = create_mock_store(4);

        let task = tokio::spawn(async move {
            let operation = StoreOperation::Copy {
                id: "valid/path/here/goat.jpg".into(),
                destination: "valid/path/there/".into(),
                flags: vec!["u".into(), "f".into(), "r".into()],
            };
            client.execute(operation, Some(ActorId::new("12345"))).await
        });

        let request = expect_operation(&mut receiver)
            .await
            .expect("Expected Copy request");
        assert_eq!(
            request.operation,
            StoreOperation::Copy {
                id: "valid/path/here/goat.jpg".into(),
                destination: "valid/path/there/".into(),
                flags: vec!["u".into(), "f".into(), "r".into()],
            }
        );
        assert_eq!(request.actor, Some(ActorId::new("12345")));
        request.respond_to.send(Ok(json!({"copied": true}))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(json!({"copied": true})));
    }

    #[tokio::test]
    async fn alias_rejects_non_string_payload() {
        let (client, mut receiver) = create_mock_store(4);
        let task = tokio::spawn(async move { client.alias("/link", None).await });

        let request = expect_operation(&mut receiver).await.unwrap();
        request.respond_to.send(Ok(json!(42))).unwrap();

        assert_eq!(task.await.unwrap(), Err(StoreError::UnexpectedPayload("alias")));
    }

    #[tokio::test]
    async fn closed_actor_is_reported() {
        let (client, receiver) = create_mock_store(4);
        drop(receiver);

        let result = client
            .execute(StoreOperation::Destroy { id: "/a.txt".into() }, None)
            .await;
        assert_eq!(result, Err(StoreError::ActorClosed));
        assert_eq!(StoreError::ActorClosed.code(), ErrorCode::DefaultServerError);
    }

    #[tokio::test]
    async fn dropped_responder_is_reported() {
        let (client, mut receiver) = create_mock_store(4);
        let task = tokio::spawn(async move {
            let operation = StoreOperation::Read { id: "/a.txt".into(), flags: vec![] };
            client.execute(operation, None).await
        });

        let request = expect_operation(&mut receiver).await.unwrap();
        drop(request.respond_to);

        assert_eq!(task.await.unwrap(), Err(StoreError::ActorDropped));
    }
}
