//! Postgres-backed store adapters.
//!
//! Runtime-checked queries with explicit row mapping. Filter parameters are
//! bound as optionals so each operation stays a single static statement;
//! `ORDER BY p.id ASC` gives deterministic pagination (insertion order on an
//! immutable key).

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::Row;
use sqlx::postgres::{PgPool, PgRow};

use storefront_catalog::store::{CategoryStore, ProductStore, StoreError};
use storefront_catalog::{Category, Product, ProductFilter, Variant};
use storefront_core::Page;

/// Store adapter over a sqlx connection pool.
///
/// The pool owns connection-level concurrency; this type is cheap to share
/// behind an `Arc` and implements both store traits.
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and return a ready store.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPool::connect(database_url).await?;
        Ok(Self::new(pool))
    }

    /// Apply embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn variants_for(&self, product_id: i64) -> Result<Vec<Variant>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT name, sku, price
            FROM product_variants
            WHERE product_id = $1
            ORDER BY id ASC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::new)?;

        rows.iter().map(variant_from_row).collect()
    }
}

#[async_trait]
impl ProductStore for PostgresStore {
    async fn list(
        &self,
        page: Page,
        filter: &ProductFilter,
    ) -> Result<(Vec<Product>, i64), StoreError> {
        let category = filter.category.as_deref();
        let price_less_than = filter.price_less_than;

        // Total reflects the filtered, un-paginated result set.
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE ($1::text IS NULL OR c.code = $1)
              AND ($2::numeric IS NULL OR p.price < $2)
            "#,
        )
        .bind(category)
        .bind(price_less_than)
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::new)?;

        let rows = sqlx::query(
            r#"
            SELECT p.code, p.price, c.code AS category_code, c.name AS category_name
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE ($1::text IS NULL OR c.code = $1)
              AND ($2::numeric IS NULL OR p.price < $2)
            ORDER BY p.id ASC
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(category)
        .bind(price_less_than)
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::new)?;

        let products = rows
            .iter()
            .map(product_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((products, total))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT p.id, p.code, p.price, c.code AS category_code, c.name AS category_name
            FROM products p
            LEFT JOIN categories c ON c.id = p.category_id
            WHERE p.code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::new)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let id: i64 = row.try_get("id").map_err(StoreError::new)?;
        let mut product = product_from_row(&row)?;
        product.variants = self.variants_for(id).await?;

        Ok(Some(product))
    }
}

#[async_trait]
impl CategoryStore for PostgresStore {
    async fn list(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query("SELECT code, name FROM categories ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::new)?;

        rows.iter().map(category_from_row).collect()
    }

    async fn insert(&self, code: &str, name: &str) -> Result<Category, StoreError> {
        // Duplicate codes trip the unique constraint and surface as a plain
        // store failure; there is no dedicated conflict path.
        let row = sqlx::query("INSERT INTO categories (code, name) VALUES ($1, $2) RETURNING code, name")
            .bind(code)
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::new)?;

        category_from_row(&row)
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, StoreError> {
    let code: String = row.try_get("code").map_err(StoreError::new)?;
    let price: Decimal = row.try_get("price").map_err(StoreError::new)?;
    let category_code: Option<String> = row.try_get("category_code").map_err(StoreError::new)?;
    let category_name: Option<String> = row.try_get("category_name").map_err(StoreError::new)?;

    let category = match (category_code, category_name) {
        (Some(code), Some(name)) => Some(Category { code, name }),
        _ => None,
    };

    Ok(Product {
        code,
        price,
        category,
        variants: Vec::new(),
    })
}

fn category_from_row(row: &PgRow) -> Result<Category, StoreError> {
    Ok(Category {
        code: row.try_get("code").map_err(StoreError::new)?,
        name: row.try_get("name").map_err(StoreError::new)?,
    })
}

fn variant_from_row(row: &PgRow) -> Result<Variant, StoreError> {
    Ok(Variant {
        name: row.try_get("name").map_err(StoreError::new)?,
        sku: row.try_get("sku").map_err(StoreError::new)?,
        price: row.try_get("price").map_err(StoreError::new)?,
    })
}
