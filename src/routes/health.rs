use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use super::AppState;

/// GET /health - Liveness probe
/// Returns 200 OK if the process is alive
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Returns 200 OK if the application is ready to serve traffic
/// Checks:
/// - The catalog loaded and is non-empty (everything else is stateless)
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    if state.catalog.is_empty() {
        tracing::error!("Readiness check failed: catalog is empty");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "reason": "catalog_empty"
            })),
        );
    }
    (StatusCode::OK, Json(json!({"status": "ready"})))
}
