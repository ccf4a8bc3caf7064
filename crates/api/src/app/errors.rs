//! Centralized error → HTTP mapping.
//!
//! Handlers return `Result<_, ApiError>`; the `IntoResponse` impl below is
//! the single place domain error kinds become status codes and the fixed
//! `{code, message}` body. New validation kinds must be mapped here
//! explicitly — anything unmapped falls through to the 500 path.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use storefront_core::CatalogError;

/// Error codes exposed in response bodies.
const CODE_INVALID_INPUT: &str = "invalid_input";
const CODE_NOT_FOUND: &str = "not_found";
const CODE_INTERNAL: &str = "internal_error";

/// Boundary wrapper around [`CatalogError`] so `?` works in handlers.
#[derive(Debug)]
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self.0 {
            CatalogError::InvalidOffset
            | CatalogError::InvalidLimit
            | CatalogError::InvalidPrice
            | CatalogError::NegativePrice
            | CatalogError::InvalidCategoryInput => (
                StatusCode::BAD_REQUEST,
                CODE_INVALID_INPUT,
                self.0.to_string(),
            ),
            CatalogError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                CODE_INVALID_INPUT,
                "Invalid input provided".to_string(),
            ),
            CatalogError::NotFound => (
                StatusCode::NOT_FOUND,
                CODE_NOT_FOUND,
                "Resource not found".to_string(),
            ),
            CatalogError::Internal(err) => {
                // Full detail stays server-side; the request span carries the
                // correlation id.
                tracing::error!(error = format!("{err:#}"), "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    CODE_INTERNAL,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "code": code, "message": message }))).into_response()
    }
}
