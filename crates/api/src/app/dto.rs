use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use storefront_catalog::{Category, ProductDetail, ProductListing};

// -------------------------
// Request DTOs
// -------------------------

/// Raw query parameters for `GET /catalog`. Everything arrives as a string;
/// validation happens in `storefront-core` so "absent" and "empty" behave
/// identically, the way query strings work.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListProductsParams {
    pub offset: String,
    pub limit: String,
    pub category: String,
    #[serde(rename = "priceLessThan")]
    pub price_less_than: String,
}

/// Body for `POST /categories`. Missing fields deserialize to empty strings
/// and are rejected by the service's completeness check.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateCategoryRequest {
    pub code: String,
    pub name: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct CategoryJson {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ProductJson {
    pub code: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryJson>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<ProductJson>,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct VariantJson {
    pub name: String,
    pub sku: String,
    pub price: f64,
}

#[derive(Debug, Serialize)]
pub struct ProductDetailJson {
    pub code: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryJson>,
    pub variants: Vec<VariantJson>,
}

// -------------------------
// JSON mapping helpers
// -------------------------

/// Decimals stay exact through the whole pipeline; this is the one boundary
/// where they become JSON numbers.
fn price_to_json(price: Decimal) -> f64 {
    price.to_f64().unwrap_or_default()
}

pub fn category_to_response(category: Category) -> CategoryJson {
    CategoryJson {
        code: category.code,
        name: category.name,
    }
}

pub fn listing_to_response(listing: ProductListing) -> CatalogResponse {
    CatalogResponse {
        products: listing
            .products
            .into_iter()
            .map(|p| ProductJson {
                code: p.code,
                price: price_to_json(p.price),
                category: p.category.map(category_to_response),
            })
            .collect(),
        total: listing.total,
    }
}

pub fn detail_to_response(detail: ProductDetail) -> ProductDetailJson {
    ProductDetailJson {
        code: detail.code,
        price: price_to_json(detail.price),
        category: detail.category.map(category_to_response),
        variants: detail
            .variants
            .into_iter()
            .map(|v| VariantJson {
                name: v.name,
                sku: v.sku,
                price: price_to_json(v.price),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use storefront_catalog::{ProductSummary, VariantView};

    #[test]
    fn absent_category_is_omitted_from_json() {
        let listing = ProductListing {
            products: vec![ProductSummary {
                code: "PROD002".to_string(),
                price: Decimal::from_str("12.49").unwrap(),
                category: None,
            }],
            total: 1,
        };

        let body = serde_json::to_value(listing_to_response(listing)).unwrap();
        assert_eq!(body["products"][0]["code"], "PROD002");
        assert_eq!(body["products"][0]["price"], 12.49);
        assert!(body["products"][0].get("category").is_none());
        assert_eq!(body["total"], 1);
    }

    #[test]
    fn detail_serializes_variants_with_resolved_prices() {
        let detail = ProductDetail {
            code: "PROD001".to_string(),
            price: Decimal::from_str("10.99").unwrap(),
            category: Some(Category {
                code: "CLOTHING".to_string(),
                name: "Clothing".to_string(),
            }),
            variants: vec![VariantView {
                name: "Small".to_string(),
                sku: "SKU-S".to_string(),
                price: Decimal::from_str("0.00").unwrap(),
            }],
        };

        let body = serde_json::to_value(detail_to_response(detail)).unwrap();
        assert_eq!(body["category"]["code"], "CLOTHING");
        assert_eq!(body["variants"][0]["sku"], "SKU-S");
        assert_eq!(body["variants"][0]["price"], 0.0);
    }

    #[test]
    fn missing_body_fields_default_to_empty_strings() {
        let req: CreateCategoryRequest = serde_json::from_str("{}").unwrap();
        assert!(req.code.is_empty());
        assert!(req.name.is_empty());
    }
}
