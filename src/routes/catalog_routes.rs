use axum::{
    extract::{Path, State},
    Json,
};
use catalog::CatalogItem;

use super::AppState;
use crate::error::AppError;

/// GET /api/catalog - the full smoothie catalog.
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<CatalogItem>> {
    Json(state.catalog.items().to_vec())
}

/// GET /api/catalog/{id} - one catalog item.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CatalogItem>, AppError> {
    state
        .catalog
        .item(&id)
        .cloned()
        .map(Json)
        .ok_or(AppError::ItemNotFound(id))
}
