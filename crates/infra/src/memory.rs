//! In-memory store adapters.
//!
//! Intended for tests/dev. Insertion order stands in for the identity-key
//! ordering the Postgres adapter gets from `ORDER BY id ASC`, and the
//! duplicate-category check mirrors the unique constraint.

use std::sync::RwLock;

use async_trait::async_trait;

use storefront_catalog::store::{CategoryStore, ProductStore, StoreError};
use storefront_catalog::{Category, Product, ProductFilter};
use storefront_core::Page;

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    categories: Vec<Category>,
}

/// In-memory implementation of both store traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append products, preserving call order as insertion order.
    pub fn seed_products(&self, products: impl IntoIterator<Item = Product>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.products.extend(products);
        }
    }

    /// Append categories, preserving call order as insertion order.
    pub fn seed_categories(&self, categories: impl IntoIterator<Item = Category>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.categories.extend(categories);
        }
    }
}

fn matches(product: &Product, filter: &ProductFilter) -> bool {
    if let Some(category) = &filter.category {
        match &product.category {
            Some(c) if c.code == *category => {}
            _ => return false,
        }
    }
    if let Some(threshold) = filter.price_less_than {
        if product.price >= threshold {
            return false;
        }
    }
    true
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(
        &self,
        page: Page,
        filter: &ProductFilter,
    ) -> Result<(Vec<Product>, i64), StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::new(anyhow::anyhow!("lock poisoned")))?;

        let filtered: Vec<&Product> = inner
            .products
            .iter()
            .filter(|p| matches(p, filter))
            .collect();
        let total = filtered.len() as i64;

        let products = filtered
            .into_iter()
            .skip(page.offset.max(0) as usize)
            .take(page.limit.max(0) as usize)
            .cloned()
            .collect();

        Ok((products, total))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Product>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::new(anyhow::anyhow!("lock poisoned")))?;

        Ok(inner.products.iter().find(|p| p.code == code).cloned())
    }
}

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::new(anyhow::anyhow!("lock poisoned")))?;

        Ok(inner.categories.clone())
    }

    async fn insert(&self, code: &str, name: &str) -> Result<Category, StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::new(anyhow::anyhow!("lock poisoned")))?;

        if inner.categories.iter().any(|c| c.code == code) {
            return Err(StoreError::new(anyhow::anyhow!(
                "duplicate key value violates unique constraint \"categories_code_key\""
            )));
        }

        let category = Category {
            code: code.to_string(),
            name: name.to_string(),
        };
        inner.categories.push(category.clone());
        Ok(category)
    }
}
