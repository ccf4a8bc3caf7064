use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    routing::get,
};

use storefront_catalog::ProductFilter;
use storefront_core::{Page, parse_limit, parse_offset, parse_price_filter};

use crate::app::dto;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:code", get(get_product))
}

/// `GET /catalog` — paginated, filtered product listing.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<dto::ListProductsParams>,
) -> Result<Json<dto::CatalogResponse>, ApiError> {
    let offset = parse_offset(&params.offset)?;
    let (limit, limit_provided) = parse_limit(&params.limit)?;
    let page = Page::normalize(offset, limit, limit_provided);

    let filter = ProductFilter {
        category: (!params.category.is_empty()).then(|| params.category.clone()),
        price_less_than: parse_price_filter(&params.price_less_than)?,
    };

    let listing = services.catalog.list_products(page, filter).await?;
    Ok(Json(dto::listing_to_response(listing)))
}

/// `GET /catalog/{code}` — product detail with variants.
pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
) -> Result<Json<dto::ProductDetailJson>, ApiError> {
    let detail = services.catalog.product_by_code(&code).await?;
    Ok(Json(dto::detail_to_response(detail)))
}
