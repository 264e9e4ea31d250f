use std::sync::Arc;

use account::ProfileStore;
use axum::{
    routing::{get, post},
    Router,
};
use catalog::Catalog;
use pricing::PricingSchedule;

mod catalog_routes;
mod health;
mod orders;
mod packaging_routes;
mod pricing_routes;
mod recommendations;

pub use health::{health, ready};

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub catalog: Arc<Catalog>,
    pub pricing: Arc<PricingSchedule>,
    pub profile_store: Arc<dyn ProfileStore>,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        // Health check endpoints (no auth, no state beyond the catalog)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/api/catalog", get(catalog_routes::list_items))
        .route("/api/catalog/{id}", get(catalog_routes::get_item))
        .route(
            "/api/recommendations",
            post(recommendations::post_weekly_recommendations),
        )
        .route(
            "/api/recommendations/current",
            post(recommendations::post_current_slot_recommendations),
        )
        .route(
            "/api/users/{user_id}/recommendations",
            get(recommendations::get_user_recommendations),
        )
        .route(
            "/api/packaging/summary",
            post(packaging_routes::post_packaging_summary),
        )
        .route("/api/pricing/tiers", get(pricing_routes::list_tiers))
        .route("/api/pricing/quote", get(pricing_routes::get_quote))
        .route("/api/orders/preview", post(orders::post_order_preview))
        .with_state(app_state)
}
