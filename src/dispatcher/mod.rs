//! # Dispatcher
//!
//! The router's entry point. Each call runs the same pipeline:
//!
//! 1. **Guard**: the identifier must be non-empty (and, when configured, split into a
//!    parent path and a name), and the action must belong to the verb.
//! 2. **Validate**: required parameters, then the resource shape ([`validate::plan`]).
//! 3. **Authorize**: the [`PermissionGate`] must answer `true`.
//! 4. **Delegate**: the planned operation goes to the store actor.
//!
//! The first failing step decides the outcome. Nothing after it runs.

pub mod error;
pub mod validate;

pub use error::DispatchError;
pub use validate::{plan, Plan};

use crate::config::RouterConfig;
use crate::error::{ErrorCode, ErrorResponse};
use crate::model::{Action, ActorId, Parameters, RequestEnvelope, Verb};
use crate::path;
use crate::permission::PermissionGate;
use crate::store::{StoreClient, StoreOperation, StorePayload};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Routes verb-level requests to store operations.
///
/// Cheap to clone; clones share the store client, the gate and the config.
pub struct Dispatcher<G: PermissionGate> {
    store: StoreClient,
    gate: Arc<G>,
    config: Arc<RouterConfig>,
}

impl<G: PermissionGate> Clone for Dispatcher<G> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            gate: self.gate.clone(),
            config: self.config.clone(),
        }
    }
}

impl<G: PermissionGate> Dispatcher<G> {
    pub fn new(store: StoreClient, gate: Arc<G>, config: RouterConfig) -> Self {
        Self {
            store,
            gate,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn gate(&self) -> &G {
        &self.gate
    }

    /// Handles a request and maps any failure to its wire shape.
    pub async fn handle(
        &self,
        verb: Verb,
        identifier: &str,
        envelope: Option<&RequestEnvelope>,
        actor: Option<&ActorId>,
    ) -> Result<Value, ErrorResponse> {
        self.dispatch(verb, identifier, envelope, actor)
            .await
            .map_err(ErrorResponse::from)
    }

    /// Like [`Dispatcher::handle`], for callers holding the verb as text.
    ///
    /// An unrecognised verb is `INVALID_ACTION`.
    pub async fn handle_raw(
        &self,
        verb: &str,
        identifier: &str,
        envelope: Option<&RequestEnvelope>,
        actor: Option<&ActorId>,
    ) -> Result<Value, ErrorResponse> {
        let verb: Verb = verb.parse().map_err(|code: ErrorCode| {
            warn!(verb, error = %code, "Unknown verb");
            code.response()
        })?;
        self.handle(verb, identifier, envelope, actor).await
    }

    /// Runs the pipeline and returns the typed error on failure.
    #[instrument(skip(self, verb, envelope, actor), fields(verb = %verb, actor = ?actor.map(ActorId::as_str)))]
    pub async fn dispatch(
        &self,
        verb: Verb,
        identifier: &str,
        envelope: Option<&RequestEnvelope>,
        actor: Option<&ActorId>,
    ) -> Result<StorePayload, DispatchError> {
        debug!(?envelope, "Dispatching");
        let result = self.run(verb, identifier, envelope, actor).await;
        match &result {
            Ok(_) => info!("Request completed"),
            Err(e) => warn!(error = %e, code = %e.code(), "Request rejected"),
        }
        result
    }

    async fn run(
        &self,
        verb: Verb,
        identifier: &str,
        envelope: Option<&RequestEnvelope>,
        actor: Option<&ActorId>,
    ) -> Result<StorePayload, DispatchError> {
        if !path::is_valid(identifier) {
            return Err(DispatchError::Addressing(ErrorCode::InvalidPathOrResource));
        }

        if self.config.validate_segments {
            path::split(identifier).map_err(DispatchError::Addressing)?;
        }

        let action = verb
            .resolve(envelope.and_then(RequestEnvelope::action_name))
            .map_err(DispatchError::Validation)?;

        let params = envelope.map(RequestEnvelope::params).unwrap_or_else(Parameters::default);
        let Plan {
            permission,
            operation,
        } = plan(action, identifier, &params, &self.config).map_err(DispatchError::Validation)?;

        self.authorize(identifier, actor, permission).await?;

        match operation {
            StoreOperation::Alias { id } => self.resolve_alias(id, actor).await,
            operation => {
                info!(action = %operation.action(), "Delegating to store");
                Ok(self.store.execute(operation, actor.cloned()).await?)
            }
        }
    }

    async fn authorize(
        &self,
        identifier: &str,
        actor: Option<&ActorId>,
        action: Action,
    ) -> Result<(), DispatchError> {
        if self.gate.verify(identifier, actor, action).await? {
            Ok(())
        } else {
            Err(DispatchError::NotAllowed {
                identifier: identifier.to_string(),
                action,
            })
        }
    }

    /// Resolves the alias, then requires `read` on the identifier it points at.
    async fn resolve_alias(
        &self,
        id: String,
        actor: Option<&ActorId>,
    ) -> Result<StorePayload, DispatchError> {
        let resolved = self.store.alias(id, actor.cloned()).await?;
        debug!(%resolved, "Alias resolved");
        self.authorize(&resolved, actor, Action::Read).await?;
        Ok(Value::String(resolved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::mock::{Decision, MockGate};
    use crate::permission::AllowAll;
    use crate::store::mock::{create_mock_store, expect_operation};
    use crate::store::{StoreError, StoreRequest};
    use serde_json::json;
    use tokio::sync::mpsc::Receiver;

    fn build<G: PermissionGate>(gate: G, config: RouterConfig) -> (Dispatcher<G>, Receiver<StoreRequest>) {
        let (client, receiver) = create_mock_store(8);
        (Dispatcher::new(client, Arc::new(gate), config), receiver)
    }

    #[tokio::test]
    async fn empty_identifier_short_circuits() {
        let (dispatcher, mut receiver) = build(MockGate::allow(), RouterConfig::default());

        let result = dispatcher.handle(Verb::Get, "", None, None).await;
        assert_eq!(
            result,
            Err(ErrorResponse {
                status: 404,
                message: "Invalid path or resource.".into(),
            })
        );
        assert!(dispatcher.gate().calls().is_empty());
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn unknown_action_and_verb_are_invalid_actions() {
        let (dispatcher, _receiver) = build(AllowAll, RouterConfig::default());

        let envelope = RequestEnvelope::action("explode");
        let result = dispatcher.dispatch(Verb::Delete, "/a.txt", Some(&envelope), None).await;
        assert_eq!(result, Err(DispatchError::Validation(ErrorCode::InvalidAction)));

        // "search" is a GET action, not a POST one
        let envelope = RequestEnvelope::action("search");
        let result = dispatcher.dispatch(Verb::Post, "/a/", Some(&envelope), None).await;
        assert_eq!(result, Err(DispatchError::Validation(ErrorCode::InvalidAction)));

        let result = dispatcher.handle_raw("PATCH", "/a.txt", None, None).await;
        assert_eq!(result.unwrap_err().status, 501);
    }

    #[tokio::test]
    async fn segment_validation_is_opt_in() {
        let config = RouterConfig {
            validate_segments: true,
            ..RouterConfig::default()
        };
        let (dispatcher, _receiver) = build(AllowAll, config);

        let result = dispatcher.dispatch(Verb::Delete, "orphan.txt", None, None).await;
        assert_eq!(result, Err(DispatchError::Addressing(ErrorCode::InvalidResourcePath)));

        let result = dispatcher.dispatch(Verb::Delete, "/orphan.txt", None, None).await;
        assert_eq!(result, Err(DispatchError::Addressing(ErrorCode::InvalidResourcePath)));
    }

    #[tokio::test]
    async fn bad_path_is_reported_before_unknown_action() {
        let config = RouterConfig {
            validate_segments: true,
            ..RouterConfig::default()
        };
        let (dispatcher, mut receiver) = build(MockGate::allow(), config);

        let envelope = RequestEnvelope::action("bogus");
        let result = dispatcher.handle(Verb::Get, "orphan.txt", Some(&envelope), None).await;
        assert_eq!(result, Err(ErrorCode::InvalidResourcePath.response()));

        let result = dispatcher.handle(Verb::Get, "/a/orphan.txt", Some(&envelope), None).await;
        assert_eq!(result, Err(ErrorCode::InvalidAction.response()));

        assert!(dispatcher.gate().calls().is_empty());
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn alias_is_authorized_on_both_ends() {
        let gate = MockGate::allow().on_identifier("/private/report.txt", Decision::Deny);
        let (dispatcher, mut receiver) = build(gate, RouterConfig::default());
        let actor = ActorId::new("12345");

        let task = {
            let dispatcher = dispatcher.clone();
            let actor = actor.clone();
            tokio::spawn(async move {
                let envelope = RequestEnvelope::action("alias");
                dispatcher
                    .dispatch(Verb::Get, "/links/report", Some(&envelope), Some(&actor))
                    .await
            })
        };

        let request = expect_operation(&mut receiver).await.unwrap();
        assert_eq!(request.operation, StoreOperation::Alias { id: "/links/report".into() });
        request
            .respond_to
            .send(Ok(json!("/private/report.txt")))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(DispatchError::NotAllowed {
                identifier: "/private/report.txt".into(),
                action: Action::Read,
            })
        );

        let calls = dispatcher.gate().calls();
        assert_eq!(calls.len(), 2);
        assert_eq!((calls[0].identifier.as_str(), calls[0].action), ("/links/report", Action::Alias));
        assert_eq!((calls[1].identifier.as_str(), calls[1].action), ("/private/report.txt", Action::Read));
    }

    #[tokio::test]
    async fn store_failures_keep_their_code() {
        let (dispatcher, mut receiver) = build(AllowAll, RouterConfig::default());

        let task = {
            let dispatcher = dispatcher.clone();
            tokio::spawn(async move { dispatcher.handle(Verb::Delete, "/a.txt", None, None).await })
        };
        let request = expect_operation(&mut receiver).await.unwrap();
        request
            .respond_to
            .send(Err(StoreError::Rejected(ErrorCode::ResourceNotFound)))
            .unwrap();
        assert_eq!(task.await.unwrap(), Err(ErrorCode::ResourceNotFound.response()));

        drop(receiver);
        let result = dispatcher.handle(Verb::Delete, "/a.txt", None, None).await;
        assert_eq!(result, Err(ErrorCode::DefaultServerError.response()));
    }
}
