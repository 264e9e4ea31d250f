use axum::{
    extract::{Query, State},
    Json,
};
use pricing::{PriceQuote, PriceTier};
use serde::{Deserialize, Serialize};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    pub quantity: u32,
    #[serde(default)]
    pub first_order: bool,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub quote: PriceQuote,
    /// Display-only comparison against single-unit pricing.
    pub savings: f64,
}

/// GET /api/pricing/tiers - the volume discount table.
pub async fn list_tiers(State(state): State<AppState>) -> Json<Vec<PriceTier>> {
    Json(state.pricing.tiers().to_vec())
}

/// GET /api/pricing/quote?quantity=N&first_order=bool
pub async fn get_quote(
    State(state): State<AppState>,
    Query(params): Query<QuoteParams>,
) -> Json<QuoteResponse> {
    let quote = state.pricing.quote(params.quantity, params.first_order);
    let savings = state.pricing.savings(params.quantity);
    Json(QuoteResponse { quote, savings })
}
