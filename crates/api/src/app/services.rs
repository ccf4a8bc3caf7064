use std::sync::Arc;

use storefront_catalog::{CatalogService, CategoriesService, CategoryStore, ProductStore};

/// Service bundle injected into handlers.
pub struct AppServices {
    pub catalog: CatalogService,
    pub categories: CategoriesService,
}

/// Wire services over the given store adapters. Production passes the
/// Postgres store twice; tests pass an in-memory store.
pub fn build_services(
    products: Arc<dyn ProductStore>,
    categories: Arc<dyn CategoryStore>,
) -> AppServices {
    AppServices {
        catalog: CatalogService::new(products),
        categories: CategoriesService::new(categories),
    }
}
