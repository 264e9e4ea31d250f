use axum::{extract::State, Json};
use chrono::Utc;
use pricing::PriceQuote;
use recommendation::TimeOfDay;
use serde::{Deserialize, Serialize};

use super::packaging_routes::resolve_cart;
use super::AppState;
use crate::error::AppError;
use crate::order::{build_order_preview, OrderLine, OrderRecord};

#[derive(Debug, Deserialize)]
pub struct OrderPreviewRequest {
    pub lines: Vec<OrderLineRequest>,
    #[serde(default)]
    pub first_order: bool,
}

#[derive(Debug, Deserialize)]
pub struct OrderLineRequest {
    pub item_id: String,
    pub time_of_day: TimeOfDay,
}

#[derive(Debug, Serialize)]
pub struct OrderPreviewResponse {
    pub order: OrderRecord,
    /// `quote.total` is the amount the caller authorizes with the payment
    /// processor; no charge happens here.
    pub quote: PriceQuote,
}

/// POST /api/orders/preview - assemble the order record and quote for a
/// cart. The caller persists the record and captures the payment.
pub async fn post_order_preview(
    State(state): State<AppState>,
    Json(request): Json<OrderPreviewRequest>,
) -> Result<Json<OrderPreviewResponse>, AppError> {
    let item_ids: Vec<String> = request.lines.iter().map(|l| l.item_id.clone()).collect();
    let cart = resolve_cart(&state, &item_ids)?;

    let lines: Vec<OrderLine> = request
        .lines
        .iter()
        .zip(cart.iter())
        .map(|(line, item)| OrderLine {
            item_id: item.id.clone(),
            item_name: item.name.clone(),
            time_of_day: line.time_of_day,
        })
        .collect();

    let summary = packaging::calculate(&cart);
    let quantity = u32::try_from(cart.len())
        .map_err(|_| AppError::ValidationError("cart is too large to price".to_string()))?;
    let quote = state.pricing.quote(quantity, request.first_order);
    let order = build_order_preview(
        lines,
        &summary,
        Utc::now(),
        state.config.delivery.lead_time_days,
    );

    Ok(Json(OrderPreviewResponse { order, quote }))
}
