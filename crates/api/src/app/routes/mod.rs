use axum::Router;

pub mod catalog;
pub mod categories;
pub mod system;

/// Router for the versioned API surface (mounted both under `/v1` and
/// unprefixed for compatibility).
pub fn router() -> Router {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/categories", categories::router())
}
