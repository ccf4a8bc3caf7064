//! Catalog domain: products, variants, categories.
//!
//! This crate contains the catalog's domain models, the store-adapter seam,
//! and the services that orchestrate store calls and DTO mapping. No HTTP,
//! no SQL.

pub mod category;
pub mod product;
pub mod service;
pub mod store;

pub use category::Category;
pub use product::{Product, ProductFilter, Variant};
pub use service::{
    CatalogService, CategoriesService, ProductDetail, ProductListing, ProductSummary, VariantView,
};
pub use store::{CategoryStore, ProductStore, StoreError};
