//! # Resource Router
//!
//! > **Verb-level requests in, authorized store operations out.**
//!
//! This crate routes CRUD-like requests (`GET`, `POST`, `PUT`, `DELETE` plus an
//! optional named action) against an abstract resource store. It checks the
//! identifier, validates parameters, asks a permission gate, and only then hands a
//! single typed operation to the store.
//!
//! ## 🏗️ Design
//!
//! ### Collaborators are traits
//! The store ([`DataStore`](store::DataStore)) and the permission engine
//! ([`PermissionGate`](permission::PermissionGate)) are async traits. The crate ships
//! an [`UnimplementedStore`](store::UnimplementedStore), [`AllowAll`](permission::AllowAll)
//! and [`DenyAll`](permission::DenyAll), and test doubles for both.
//!
//! ### The store runs as an actor
//! A [`StoreActor`](store::StoreActor) owns the backend and processes operations one at a
//! time, so backends need no locking. The dispatcher talks to it through a cloneable
//! [`StoreClient`](store::StoreClient).
//!
//! ### One error, mapped once
//! Every failure is a single symbolic [`ErrorCode`]. It becomes an
//! [`ErrorResponse`] (`{status, message}`) at the dispatcher boundary and nowhere else.
//!
//! ## 🗺️ Module Tour
//!
//! - [`dispatcher`]: the request pipeline and per-action validation.
//! - [`model`]: verbs, actions, envelopes, parameters.
//! - [`path`]: container/leaf classification of identifiers.
//! - [`error`]: the symbolic error table.
//! - [`store`]: backend trait, actor, client and mocks.
//! - [`permission`]: gate trait, fixed gates and mock.
//! - [`lifecycle`]: [`RouterSystem`](lifecycle::RouterSystem) wiring and tracing setup.
//! - [`config`]: [`RouterConfig`], loadable from TOML.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod path;
pub mod permission;
pub mod store;

pub use config::{ConfigError, RouterConfig};
pub use dispatcher::{DispatchError, Dispatcher};
pub use error::{error_response, ErrorCode, ErrorResponse};
pub use model::{Action, ActorId, BulkResources, Parameters, RequestEnvelope, ResourceKind, Verb};
