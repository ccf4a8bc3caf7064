use std::sync::Arc;

use storefront_core::{CatalogError, CatalogResult};

use crate::category::Category;
use crate::store::CategoryStore;

/// Category read/create operations.
pub struct CategoriesService {
    store: Arc<dyn CategoryStore>,
}

impl CategoriesService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    /// All categories in store order. No categories is an empty list, not an
    /// error.
    pub async fn list(&self) -> CatalogResult<Vec<Category>> {
        Ok(self.store.list().await?)
    }

    /// Create a category after validating input.
    ///
    /// The check is an exact empty-string check — no trimming. A duplicate
    /// code is rejected by the store's uniqueness constraint and surfaces as
    /// a generic internal failure; there is no dedicated duplicate kind.
    pub async fn create(&self, code: &str, name: &str) -> CatalogResult<Category> {
        if code.is_empty() || name.is_empty() {
            return Err(CatalogError::InvalidCategoryInput);
        }

        Ok(self.store.insert(code, name).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::store::StoreError;

    #[derive(Default)]
    struct StubStore {
        categories: Mutex<Vec<Category>>,
        fail: bool,
    }

    #[async_trait]
    impl CategoryStore for StubStore {
        async fn list(&self) -> Result<Vec<Category>, StoreError> {
            if self.fail {
                return Err(StoreError::new(anyhow::anyhow!("connection refused")));
            }
            Ok(self.categories.lock().unwrap().clone())
        }

        async fn insert(&self, code: &str, name: &str) -> Result<Category, StoreError> {
            let mut categories = self.categories.lock().unwrap();
            if categories.iter().any(|c| c.code == code) {
                return Err(StoreError::new(anyhow::anyhow!(
                    "unique constraint violation on categories.code"
                )));
            }
            let category = Category {
                code: code.to_string(),
                name: name.to_string(),
            };
            categories.push(category.clone());
            Ok(category)
        }
    }

    #[tokio::test]
    async fn list_returns_empty_when_no_categories_exist() {
        let svc = CategoriesService::new(Arc::new(StubStore::default()));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_then_list_round_trips_exact_values() {
        let svc = CategoriesService::new(Arc::new(StubStore::default()));

        let created = svc.create("CLOTHING", "Clothing").await.unwrap();
        assert_eq!(created.code, "CLOTHING");
        assert_eq!(created.name, "Clothing");

        let listed = svc.list().await.unwrap();
        assert_eq!(listed, vec![created]);
    }

    #[tokio::test]
    async fn create_rejects_empty_fields() {
        let svc = CategoriesService::new(Arc::new(StubStore::default()));

        for (code, name) in [("", "X"), ("X", ""), ("", "")] {
            let err = svc.create(code, name).await.unwrap_err();
            assert!(
                matches!(err, CatalogError::InvalidCategoryInput),
                "code={code:?} name={name:?}"
            );
        }
    }

    #[tokio::test]
    async fn create_does_not_trim_whitespace_input() {
        // Whitespace-only strings are non-empty and pass validation; the
        // check is exact, matching the store's notion of emptiness.
        let svc = CategoriesService::new(Arc::new(StubStore::default()));
        let created = svc.create(" ", " ").await.unwrap();
        assert_eq!(created.code, " ");
    }

    #[tokio::test]
    async fn duplicate_code_surfaces_as_internal() {
        let svc = CategoriesService::new(Arc::new(StubStore::default()));

        svc.create("SHOES", "Shoes").await.unwrap();
        let err = svc.create("SHOES", "Shoes again").await.unwrap_err();
        assert!(matches!(err, CatalogError::Internal(_)));
    }

    #[tokio::test]
    async fn list_propagates_store_failure_as_internal() {
        let svc = CategoriesService::new(Arc::new(StubStore {
            fail: true,
            ..Default::default()
        }));
        let err = svc.list().await.unwrap_err();
        assert!(matches!(err, CatalogError::Internal(_)));
    }
}
