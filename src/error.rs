use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Catalog item not found: {0}")]
    ItemNotFound(String),

    #[error("Cart references unknown catalog item: {0}")]
    UnknownCartItem(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Profile store error: {0}")]
    AccountError(#[from] account::AccountError),

    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),

    #[error("Pricing error: {0}")]
    PricingError(#[from] pricing::PricingError),

    #[error("Internal server error")]
    InternalError(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_title, error_message) = match self {
            AppError::ValidationError(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation Error",
                msg,
            ),
            AppError::ItemNotFound(id) => (
                StatusCode::NOT_FOUND,
                "Item Not Found",
                format!("No catalog item with id '{id}'."),
            ),
            AppError::UnknownCartItem(id) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Unknown Cart Item",
                format!("Cart references catalog item '{id}', which does not exist."),
            ),
            AppError::UserNotFound(id) => (
                StatusCode::NOT_FOUND,
                "User Not Found",
                format!("No profile found for user '{id}'."),
            ),
            AppError::AccountError(e) => {
                tracing::error!("Profile store error: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Profile Store Unavailable",
                    "The profile store could not be reached. Please try again later.".to_string(),
                )
            }
            AppError::CatalogError(e) => {
                tracing::error!("Catalog error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
            AppError::PricingError(e) => {
                tracing::error!("Pricing error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An unexpected error occurred. Please try again later.".to_string(),
                )
            }
        };

        (
            status_code,
            Json(json!({
                "error": error_title,
                "message": error_message,
            })),
        )
            .into_response()
    }
}
