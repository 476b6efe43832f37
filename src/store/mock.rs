//! # Store Mocks
//!
//! Two ways to stand in for a [`StoreActor`](crate::store::StoreActor) in tests:
//!
//! - [`create_mock_store`] hands you the raw request channel. Receive a request with
//!   [`expect_operation`], assert on it, then answer through its `respond_to`.
//! - [`MockStore`] answers from a queue of expectations and records every request,
//!   so a test can drive the dispatcher end to end and inspect what was delegated.
//!
//! ```rust
//! use resource_router::model::Action;
//! use resource_router::store::mock::MockStore;
//! use resource_router::store::StoreOperation;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockStore::new();
//!     mock.expect(Action::Destroy).return_ok(json!({"destroyed": true}));
//!
//!     let client = mock.client();
//!     let destroy = StoreOperation::Destroy { id: "/a/b.txt".into() };
//!     let payload = client.execute(destroy, None).await.unwrap();
//!     assert_eq!(payload, json!({"destroyed": true}));
//!
//!     assert_eq!(
//!         mock.operations(),
//!         vec![StoreOperation::Destroy { id: "/a/b.txt".into() }]
//!     );
//!     mock.verify();
//! }
//! ```

use crate::error::ErrorCode;
use crate::model::{Action, ActorId};
use crate::store::client::StoreClient;
use crate::store::error::StoreError;
use crate::store::message::{StoreOperation, StorePayload, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

struct Expectation {
    action: Action,
    response: Result<StorePayload, StoreError>,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    received: Vec<(StoreOperation, Option<ActorId>)>,
    mismatches: Vec<String>,
}

/// A mock store answering from queued expectations.
///
/// Requests that arrive with no matching expectation are answered with
/// `DEFAULT_SERVER_ERROR` and reported by [`MockStore::verify`].
pub struct MockStore {
    client: StoreClient,
    state: Arc<Mutex<MockState>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    /// Creates a mock with no expectations. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest>(100);
        let state = Arc::new(Mutex::new(MockState::default()));
        let state_clone = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let response = {
                    let mut state = state_clone.lock().unwrap();
                    let action = request.operation.action();
                    state
                        .received
                        .push((request.operation.clone(), request.actor.clone()));
                    match state.expectations.pop_front() {
                        Some(expectation) if expectation.action == action => expectation.response,
                        Some(expectation) => {
                            state.mismatches.push(format!(
                                "expected {}, received {}",
                                expectation.action, action
                            ));
                            Err(StoreError::Rejected(ErrorCode::DefaultServerError))
                        }
                        None => {
                            state.mismatches.push(format!("unexpected {action}"));
                            Err(StoreError::Rejected(ErrorCode::DefaultServerError))
                        }
                    }
                };
                let _ = request.respond_to.send(response);
            }
        });

        Self {
            client: StoreClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> StoreClient {
        self.client.clone()
    }

    /// Expects the next request to perform `action`.
    pub fn expect(&self, action: Action) -> ExpectationBuilder {
        ExpectationBuilder {
            action,
            state: self.state.clone(),
        }
    }

    /// Every operation received so far, in arrival order.
    pub fn operations(&self) -> Vec<StoreOperation> {
        let state = self.state.lock().unwrap();
        state.received.iter().map(|(op, _)| op.clone()).collect()
    }

    /// Every request received so far, with the actor that sent it.
    pub fn requests(&self) -> Vec<(StoreOperation, Option<ActorId>)> {
        self.state.lock().unwrap().received.clone()
    }

    /// Panics if an expectation is unmet or a request did not match.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.mismatches.is_empty() {
            panic!("Store mock mismatches: {:?}", state.mismatches);
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder {
    action: Action,
    state: Arc<Mutex<MockState>>,
}

impl ExpectationBuilder {
    /// Answers the request with a payload.
    pub fn return_ok(self, payload: StorePayload) {
        self.push(Ok(payload));
    }

    /// Answers the request with a rejection.
    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<StorePayload, StoreError>) {
        let mut state = self.state.lock().unwrap();
        state.expectations.push_back(Expectation {
            action: self.action,
            response,
        });
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a store client and the receiver its requests arrive on.
pub fn create_mock_store(buffer_size: usize) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Waits for the next request; `None` once every client is gone.
pub async fn expect_operation(receiver: &mut mpsc::Receiver<StoreRequest>) -> Option<StoreRequest> {
    receiver.recv().await
}
