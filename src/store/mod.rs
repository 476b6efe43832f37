//! Data store plumbing.
//!
//! The router talks to storage through a [`StoreClient`], which forwards each
//! [`StoreOperation`] to a [`StoreActor`] owning a [`DataStore`] implementation.
//!
//! # Main Components
//!
//! - [`DataStore`] - Trait a storage backend implements
//! - [`StoreActor`] - Runs a backend in its own task
//! - [`StoreClient`] - Cloneable handle used by the dispatcher
//! - [`UnimplementedStore`] - Backend that rejects everything with `NOT_IMPLEMENTED`
//!
//! # Testing
//!
//! See [`mock`] for ways to observe what the dispatcher delegates.

pub mod actor;
pub mod backend;
pub mod client;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::StoreActor;
pub use backend::{DataStore, StoreResult, UnimplementedStore};
pub use client::StoreClient;
pub use error::StoreError;
pub use message::{CreateParams, Response, StoreOperation, StorePayload, StoreRequest};
