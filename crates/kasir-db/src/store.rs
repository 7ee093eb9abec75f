//! # Store Traits
//!
//! The persistence contracts the API layer depends on.
//!
//! ## Implementations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Store Contracts                                 │
//! │                                                                         │
//! │     ProductStore   CategoryStore   TransactionStore   ReportStore      │
//! │          ▲               ▲                ▲                ▲            │
//! │          ├───────────────┴────────────────┴────────────────┤            │
//! │          │                                                 │            │
//! │  ┌───────┴───────────────────────┐   ┌─────────────────────┴────────┐  │
//! │  │ repository::* (PostgreSQL)    │   │ MemoryStore (BTreeMap)       │  │
//! │  │ ProductRepository, ...        │   │ one struct, all four traits  │  │
//! │  └───────────────────────────────┘   └──────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All list operations return rows in ascending id order, except
//! transactions which are newest first.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::DbResult;
use kasir_core::{
    Category, CategoryInput, NewTransaction, Product, ProductFilter, ProductInput, SalesSummary,
    Transaction,
};

/// Product CRUD with optional filtering.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Lists products matching every predicate of `filter`.
    async fn list(&self, filter: &ProductFilter) -> DbResult<Vec<Product>>;

    /// Fetches one product, `None` if the id does not exist.
    async fn get(&self, id: i64) -> DbResult<Option<Product>>;

    /// Inserts a product and returns it with its new id.
    async fn create(&self, input: &ProductInput) -> DbResult<Product>;

    /// Replaces every mutable field. `DbError::NotFound` if the id is absent.
    async fn update(&self, id: i64, input: &ProductInput) -> DbResult<Product>;

    /// `DbError::NotFound` if the id is absent.
    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// Category CRUD.
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn list(&self) -> DbResult<Vec<Category>>;

    async fn get(&self, id: i64) -> DbResult<Option<Category>>;

    async fn create(&self, input: &CategoryInput) -> DbResult<Category>;

    async fn update(&self, id: i64, input: &CategoryInput) -> DbResult<Category>;

    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// Transaction persistence.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Persists the parent and all its detail rows as one unit.
    ///
    /// Either every row is written or none is. The returned transaction
    /// carries the generated ids and `created_at`.
    async fn create(&self, tx: &NewTransaction) -> DbResult<Transaction>;

    /// Fetches a transaction with its details.
    async fn get(&self, id: i64) -> DbResult<Option<Transaction>>;

    /// Lists transactions newest first, without details.
    async fn list(&self) -> DbResult<Vec<Transaction>>;

    /// Removes a transaction and its details. `DbError::NotFound` if absent.
    async fn delete(&self, id: i64) -> DbResult<()>;
}

/// Sales aggregation over `[start, end)`.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Revenue, count and best seller of transactions created in `[start, end)`.
    ///
    /// The best seller is the product with the highest summed quantity; ties
    /// go to the lowest product id. Details whose product no longer exists
    /// are not eligible.
    async fn sales_summary(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DbResult<SalesSummary>;
}
