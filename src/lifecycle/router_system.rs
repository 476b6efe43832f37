use crate::config::RouterConfig;
use crate::dispatcher::Dispatcher;
use crate::permission::PermissionGate;
use crate::store::{DataStore, StoreActor};
use std::sync::Arc;
use tracing::{error, info};

/// Owns the running router: the store actor task and the dispatcher in front of it.
///
/// # Example
///
/// ```rust
/// use resource_router::lifecycle::RouterSystem;
/// use resource_router::permission::AllowAll;
/// use resource_router::store::UnimplementedStore;
/// use resource_router::{RouterConfig, Verb};
///
/// #[tokio::main]
/// async fn main() {
///     let system = RouterSystem::new(RouterConfig::default(), UnimplementedStore, AllowAll);
///
///     let result = system.dispatcher.handle(Verb::Delete, "/a/b.txt", None, None).await;
///     assert_eq!(result.unwrap_err().status, 501);
///
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct RouterSystem<G: PermissionGate> {
    /// Entry point for requests. Clone it to share across tasks.
    pub dispatcher: Dispatcher<G>,

    handle: tokio::task::JoinHandle<()>,
}

impl<G: PermissionGate> RouterSystem<G> {
    /// Spawns the store actor and wires the dispatcher to it.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new<S: DataStore>(config: RouterConfig, store: S, gate: G) -> Self {
        let (actor, client) = StoreActor::new(config.store_buffer_size, store);
        let handle = tokio::spawn(actor.run());

        info!(
            buffer = config.store_buffer_size,
            download_format = %config.download_format,
            "Router started"
        );

        Self {
            dispatcher: Dispatcher::new(client, Arc::new(gate), config),
            handle,
        }
    }

    /// Stops the store actor once every dispatcher clone is gone.
    ///
    /// Clones of the dispatcher still held elsewhere keep the actor alive, and this
    /// waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down router...");

        // Dropping the last client closes the channel and ends the actor loop
        drop(self.dispatcher);

        if let Err(e) = self.handle.await {
            error!("Store actor task failed: {:?}", e);
            return Err(format!("Store actor task failed: {:?}", e));
        }

        info!("Router shutdown complete.");
        Ok(())
    }
}
