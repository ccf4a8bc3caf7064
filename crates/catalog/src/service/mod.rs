//! Business services: orchestration between the HTTP boundary and the store
//! adapters, plus the DTO mapping (including variant price inheritance).

pub mod catalog;
pub mod categories;

pub use catalog::{CatalogService, ProductDetail, ProductListing, ProductSummary, VariantView};
pub use categories::CategoriesService;
