use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    routing::get,
};

use storefront_core::CatalogError;

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_categories).post(create_category))
}

/// `GET /categories` — all categories, possibly an empty array.
pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<dto::CategoryJson>>, ApiError> {
    let categories = services.categories.list().await?;
    Ok(Json(
        categories.into_iter().map(dto::category_to_response).collect(),
    ))
}

/// `POST /categories` — create a category.
pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateCategoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<dto::CategoryJson>), ApiError> {
    // A body that fails to decode is a plain bad request, mapped through the
    // same table as every other input error.
    let Json(req) = body.map_err(|_| CatalogError::InvalidInput)?;

    let category = services.categories.create(&req.code, &req.name).await?;
    Ok((StatusCode::CREATED, Json(dto::category_to_response(category))))
}
