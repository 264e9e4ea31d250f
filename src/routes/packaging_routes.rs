use axum::{extract::State, Json};
use catalog::CatalogItem;
use packaging::PackagingSummary;
use serde::Deserialize;

use super::AppState;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct PackagingRequest {
    /// Catalog item ids, one entry per smoothie; duplicates ship twice.
    pub item_ids: Vec<String>,
}

pub(super) fn resolve_cart(
    state: &AppState,
    item_ids: &[String],
) -> Result<Vec<CatalogItem>, AppError> {
    item_ids
        .iter()
        .map(|id| {
            state
                .catalog
                .item(id)
                .cloned()
                .ok_or_else(|| AppError::UnknownCartItem(id.clone()))
        })
        .collect()
}

/// POST /api/packaging/summary - packaging breakdown for a cart.
pub async fn post_packaging_summary(
    State(state): State<AppState>,
    Json(request): Json<PackagingRequest>,
) -> Result<Json<PackagingSummary>, AppError> {
    let cart = resolve_cart(&state, &request.item_ids)?;
    Ok(Json(packaging::calculate(&cart)))
}
