//! Runtime orchestration.
//!
//! - [`RouterSystem`] - Spawns the store actor and hands out the dispatcher
//! - [`setup_tracing`] - Installs the log subscriber

pub mod router_system;
pub mod tracing;

pub use router_system::*;
pub use tracing::*;
