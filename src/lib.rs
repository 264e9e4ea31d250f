pub mod clock;
pub mod config;
pub mod error;
pub mod observability;
pub mod order;
pub mod routes;

pub use routes::AppState;

use std::sync::Arc;

use account::InMemoryProfileStore;
use catalog::Catalog;
use pricing::PricingSchedule;

/// Create app router for testing
///
/// Builds the Axum router against the built-in catalog, the standard
/// pricing schedule and an empty in-memory profile store, useful for
/// integration testing without starting the full server.
pub fn create_app() -> anyhow::Result<axum::Router> {
    let state = AppState {
        config: config::Config {
            server: config::ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            observability: config::ObservabilityConfig::default(),
            delivery: config::DeliveryConfig::default(),
        },
        catalog: Arc::new(Catalog::builtin()?),
        pricing: Arc::new(PricingSchedule::standard()),
        profile_store: Arc::new(InMemoryProfileStore::new()),
    };

    Ok(routes::router(state))
}
