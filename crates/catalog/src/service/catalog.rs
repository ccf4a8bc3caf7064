use std::sync::Arc;

use rust_decimal::Decimal;

use storefront_core::{CatalogError, CatalogResult, Page};

use crate::category::Category;
use crate::product::{Product, ProductFilter, Variant};
use crate::store::ProductStore;

/// A product as it appears in the list view. Variants are detail-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSummary {
    pub code: String,
    pub price: Decimal,
    pub category: Option<Category>,
}

/// A variant with its effective price already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantView {
    pub name: String,
    pub sku: String,
    pub price: Decimal,
}

/// A product as it appears in the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub code: String,
    pub price: Decimal,
    pub category: Option<Category>,
    pub variants: Vec<VariantView>,
}

/// Result of a product listing: one page of summaries plus the filtered
/// (un-paginated) total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListing {
    pub products: Vec<ProductSummary>,
    pub total: i64,
}

/// Catalog read operations.
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Retrieve one page of products matching `filter`.
    ///
    /// `total` reflects the filtered result set regardless of the page
    /// window. Filters compose conjunctively.
    pub async fn list_products(
        &self,
        page: Page,
        filter: ProductFilter,
    ) -> CatalogResult<ProductListing> {
        let (products, total) = self.store.list(page, &filter).await?;

        Ok(ProductListing {
            products: products.into_iter().map(summarize).collect(),
            total,
        })
    }

    /// Retrieve a single product with variants by its code.
    ///
    /// A blank code is client error, a missing product is `NotFound`, and a
    /// store fault stays `Internal` — the three are never conflated.
    pub async fn product_by_code(&self, code: &str) -> CatalogResult<ProductDetail> {
        if code.trim().is_empty() {
            return Err(CatalogError::InvalidInput);
        }

        match self.store.find_by_code(code).await? {
            Some(product) => Ok(detail(product)),
            None => Err(CatalogError::NotFound),
        }
    }
}

fn summarize(product: Product) -> ProductSummary {
    ProductSummary {
        code: product.code,
        price: product.price,
        category: product.category,
    }
}

fn detail(product: Product) -> ProductDetail {
    // Effective price resolution happens here, not in the store: the store
    // hands back the raw tri-state and the service applies the rule.
    let product_price = product.price;
    let variants = product
        .variants
        .into_iter()
        .map(|v: Variant| VariantView {
            price: v.effective_price(product_price),
            name: v.name,
            sku: v.sku,
        })
        .collect();

    ProductDetail {
        code: product.code,
        price: product.price,
        category: product.category,
        variants,
    }
}
