//! Store adapter seam.
//!
//! The services talk to persistence through these traits; implementations
//! live in `storefront-infra`. Absence is modeled with `Option`, so every
//! `StoreError` is an infrastructure fault — the service layer relies on this
//! to keep "not found" and "store broke" distinct.

use async_trait::async_trait;
use thiserror::Error;

use storefront_core::{CatalogError, Page};

use crate::category::Category;
use crate::product::{Product, ProductFilter};

/// Failure raised by a store backend (connection loss, constraint violation,
/// malformed row). Deliberately opaque to the domain.
#[derive(Debug, Error)]
#[error("store backend failure: {0}")]
pub struct StoreError(#[from] anyhow::Error);

impl StoreError {
    pub fn new(err: impl Into<anyhow::Error>) -> Self {
        Self(err.into())
    }
}

impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        CatalogError::Internal(err.0)
    }
}

/// Read access to products.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Filtered, paginated listing plus the filtered (un-paginated) total.
    ///
    /// Implementations must order by the immutable insertion-order identity
    /// key ascending; offset/limit pagination is undefined otherwise.
    async fn list(&self, page: Page, filter: &ProductFilter)
    -> Result<(Vec<Product>, i64), StoreError>;

    /// Look up a single product (with category and variants) by its code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Product>, StoreError>;
}

/// Read/create access to categories.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    /// All categories in insertion order; empty is a valid result.
    async fn list(&self) -> Result<Vec<Category>, StoreError>;

    /// Insert a new category. A duplicate code violates the store's
    /// uniqueness constraint and surfaces as a `StoreError`.
    async fn insert(&self, code: &str, name: &str) -> Result<Category, StoreError>;
}
