//! # Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`.
//!
//! ```bash
//! # Request outcomes and store actor lifecycle
//! RUST_LOG=info cargo run
//!
//! # Full envelopes and store operations
//! RUST_LOG=debug cargo run
//!
//! # Only the dispatcher
//! RUST_LOG=resource_router::dispatcher=debug cargo run
//! ```
//!
//! Every [`Dispatcher::dispatch`](crate::dispatcher::Dispatcher::dispatch) call opens a
//! span carrying the verb, identifier and actor, so a rejected request reads as:
//!
//! ```text
//! WARN dispatch{identifier="/a/b.txt" verb=POST actor=Some("12345")}: Request rejected error=Actor may not create /a/b.txt code=NOT_ALLOWED
//! ```
//!
//! Calling it twice panics, since the global subscriber can only be set once.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
