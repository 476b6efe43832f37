//! Demo: a router over the unimplemented store.
//!
//! Every request that passes validation and the permission gate reaches the store,
//! which answers `NOT_IMPLEMENTED`. Requests rejected earlier show which check
//! stopped them.

use resource_router::lifecycle::{setup_tracing, RouterSystem};
use resource_router::permission::mock::{Decision, MockGate};
use resource_router::store::UnimplementedStore;
use resource_router::{Action, ActorId, Parameters, RequestEnvelope, RouterConfig, Verb};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => RouterConfig::load(&path).map_err(|e| e.to_string())?,
        None => RouterConfig::default(),
    };

    info!("Starting router demo");

    // Everyone may read; nobody may destroy
    let gate = MockGate::allow().on_action(Action::Destroy, Decision::Deny);
    let system = RouterSystem::new(config, UnimplementedStore, gate);
    let actor = ActorId::new("12345");

    let search = RequestEnvelope::action("search").parameters(Parameters {
        query: Some("*".into()),
        ..Default::default()
    });
    let rename = RequestEnvelope::action("rename");
    let create = RequestEnvelope::with_parameters(Parameters {
        content: Some("raw image data".into()),
        ..Default::default()
    });

    let requests: Vec<(Verb, &str, Option<&RequestEnvelope>)> = vec![
        (Verb::Get, "", None),
        (Verb::Get, "valid/path/here/", Some(&search)),
        (Verb::Get, "valid/path/here/goat.jpg", Some(&search)),
        (Verb::Post, "valid/path/here/goat.jpg", Some(&create)),
        (Verb::Put, "valid/path/here/goat.jpg", Some(&rename)),
        (Verb::Delete, "valid/path/here/goat.jpg", None),
    ];

    for (verb, identifier, envelope) in requests {
        let span = tracing::info_span!("demo_request");
        let result = system
            .dispatcher
            .handle(verb, identifier, envelope, Some(&actor))
            .instrument(span)
            .await;
        match result {
            Ok(payload) => info!(%verb, identifier, %payload, "Request succeeded"),
            Err(response) => error!(%verb, identifier, status = response.status, message = %response.message, "Request failed"),
        }
    }

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
