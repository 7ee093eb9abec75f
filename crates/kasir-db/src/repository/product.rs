//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Filtered Listing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How the product filter is built                      │
//! │                                                                         │
//! │  GET /api/products?name=kopi&min_price=10000                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductFilter { name: "kopi", min_price: 10000 }                      │
//! │       │                                                                 │
//! │       ▼  QueryBuilder appends one bound predicate per field            │
//! │  SELECT ... FROM products WHERE TRUE                                   │
//! │     AND name ILIKE $1          -- '%kopi%' (wildcards escaped)         │
//! │     AND price >= $2                                                    │
//! │  ORDER BY id                                                           │
//! │                                                                         │
//! │  No predicates → every product, ascending id.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::store::ProductStore;
use kasir_core::{Product, ProductFilter, ProductInput};

const PRODUCT_COLUMNS: &str = "id, name, price, stock, category_id";

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let coffee = repo.list(&ProductFilter::new().name("kopi")).await?;
/// let product = repo.get(1).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: PgPool) -> Self {
        ProductRepository { pool }
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ProductStore for ProductRepository {
    async fn list(&self, filter: &ProductFilter) -> DbResult<Vec<Product>> {
        debug!(?filter, "Listing products");

        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE TRUE"));

        if let Some(name) = filter.name_filter() {
            query
                .push(" AND name ILIKE ")
                .push_bind(format!("%{}%", escape_like(name)));
        }

        if let Some(category_id) = filter.category_filter() {
            query.push(" AND category_id = ").push_bind(category_id);
        }

        if let Some(min_price) = filter.min_price_filter() {
            query.push(" AND price >= ").push_bind(min_price);
        }

        if let Some(max_price) = filter.max_price_filter() {
            query.push(" AND price <= ").push_bind(max_price);
        }

        query.push(" ORDER BY id");

        let products = query
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Product list returned");
        Ok(products)
    }

    async fn get(&self, id: i64) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn create(&self, input: &ProductInput) -> DbResult<Product> {
        debug!(name = %input.name, price = input.price, "Inserting product");

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            INSERT INTO products (name, price, stock, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .bind(input.category_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update(&self, id: i64, input: &ProductInput) -> DbResult<Product> {
        debug!(id, name = %input.name, "Updating product");

        let product = sqlx::query_as::<_, Product>(&format!(
            r#"
            UPDATE products SET
                name = $2,
                price = $3,
                stock = $4,
                category_id = $5
            WHERE id = $1
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&input.name)
        .bind(input.price)
        .bind(input.stock)
        .bind(input.category_id)
        .fetch_optional(&self.pool)
        .await?;

        product.ok_or_else(|| DbError::not_found("Product", id))
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }
}

/// Escapes `%`, `_` and the escape character itself so user input is
/// matched literally inside an ILIKE pattern.
pub(crate) fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("kopi"), "kopi");
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\"), "c:\\\\");
    }
}
