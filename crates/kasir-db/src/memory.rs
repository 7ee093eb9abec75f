//! # In-Memory Store
//!
//! A single struct implementing every store trait on top of `BTreeMap`s.
//! Used by the API tests and for running the server without PostgreSQL.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  MemoryStore                                                            │
//! │  └── Mutex<Tables>                                                      │
//! │      ├── products:      BTreeMap<id, Product>                           │
//! │      ├── categories:    BTreeMap<id, Category>                          │
//! │      ├── transactions:  BTreeMap<id, Transaction>   (details inline)    │
//! │      ├── next ids:      one monotonic counter per table                 │
//! │      └── clock:         fixed instant or Utc::now()                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are never reused, like a BIGSERIAL column. The store enforces the
//! same row constraints as the schema (`quantity > 0`, `subtotal >= 0`)
//! and checks every line before writing anything, so a rejected create
//! leaves no trace.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::store::{CategoryStore, ProductStore, ReportStore, TransactionStore};
use kasir_core::{
    BestSeller, Category, CategoryInput, NewTransaction, Product, ProductFilter, ProductInput,
    SalesSummary, Transaction, TransactionDetail,
};

#[derive(Debug, Default)]
struct Tables {
    products: BTreeMap<i64, Product>,
    categories: BTreeMap<i64, Category>,
    transactions: BTreeMap<i64, Transaction>,
    last_product_id: i64,
    last_category_id: i64,
    last_transaction_id: i64,
    last_detail_id: i64,
    fixed_now: Option<DateTime<Utc>>,
}

impl Tables {
    fn now(&self) -> DateTime<Utc> {
        self.fixed_now.unwrap_or_else(Utc::now)
    }
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

/// In-memory implementation of every store trait.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins `created_at` of subsequently created transactions to `now`.
    pub async fn set_now(&self, now: DateTime<Utc>) {
        self.tables.lock().await.fixed_now = Some(now);
    }

    /// Returns to the system clock.
    pub async fn clear_now(&self) {
        self.tables.lock().await.fixed_now = None;
    }

    /// Number of detail rows across all transactions.
    pub async fn detail_count(&self) -> usize {
        self.tables
            .lock()
            .await
            .transactions
            .values()
            .map(|tx| tx.details.len())
            .sum()
    }
}

// =============================================================================
// Products
// =============================================================================

#[async_trait]
impl ProductStore for MemoryStore {
    async fn list(&self, filter: &ProductFilter) -> DbResult<Vec<Product>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .products
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> DbResult<Option<Product>> {
        Ok(self.tables.lock().await.products.get(&id).cloned())
    }

    async fn create(&self, input: &ProductInput) -> DbResult<Product> {
        if input.price < 0.0 {
            return Err(DbError::constraint("products.price must be >= 0"));
        }

        let mut tables = self.tables.lock().await;
        let id = next_id(&mut tables.last_product_id);
        let product = input.clone().into_product(id);
        tables.products.insert(id, product.clone());

        debug!(id, "Product stored in memory");
        Ok(product)
    }

    async fn update(&self, id: i64, input: &ProductInput) -> DbResult<Product> {
        if input.price < 0.0 {
            return Err(DbError::constraint("products.price must be >= 0"));
        }

        let mut tables = self.tables.lock().await;
        let slot = tables
            .products
            .get_mut(&id)
            .ok_or_else(|| DbError::not_found("Product", id))?;
        *slot = input.clone().into_product(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        self.tables
            .lock()
            .await
            .products
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("Product", id))
    }
}

// =============================================================================
// Categories
// =============================================================================

#[async_trait]
impl CategoryStore for MemoryStore {
    async fn list(&self) -> DbResult<Vec<Category>> {
        Ok(self.tables.lock().await.categories.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> DbResult<Option<Category>> {
        Ok(self.tables.lock().await.categories.get(&id).cloned())
    }

    async fn create(&self, input: &CategoryInput) -> DbResult<Category> {
        let mut tables = self.tables.lock().await;
        let id = next_id(&mut tables.last_category_id);
        let category = input.clone().into_category(id);
        tables.categories.insert(id, category.clone());
        Ok(category)
    }

    async fn update(&self, id: i64, input: &CategoryInput) -> DbResult<Category> {
        let mut tables = self.tables.lock().await;
        let slot = tables
            .categories
            .get_mut(&id)
            .ok_or_else(|| DbError::not_found("Category", id))?;
        *slot = input.clone().into_category(id);
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        self.tables
            .lock()
            .await
            .categories
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("Category", id))
    }
}

// =============================================================================
// Transactions
// =============================================================================

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn create(&self, new_tx: &NewTransaction) -> DbResult<Transaction> {
        // Check every row before touching the tables.
        for line in new_tx.details() {
            if line.quantity <= 0 {
                return Err(DbError::constraint(
                    "transaction_details.quantity must be > 0",
                ));
            }
            if line.subtotal < 0 {
                return Err(DbError::constraint(
                    "transaction_details.subtotal must be >= 0",
                ));
            }
        }

        let mut tables = self.tables.lock().await;
        let id = next_id(&mut tables.last_transaction_id);
        let created_at = tables.now();

        let details: Vec<TransactionDetail> = new_tx
            .details()
            .iter()
            .map(|line| TransactionDetail {
                id: next_id(&mut tables.last_detail_id),
                transaction_id: id,
                product_id: line.product_id,
                quantity: line.quantity,
                subtotal: line.subtotal,
            })
            .collect();

        let transaction = Transaction {
            id,
            total_amount: new_tx.total_amount(),
            created_at,
            details,
        };
        tables.transactions.insert(id, transaction.clone());

        debug!(id, lines = transaction.details.len(), "Transaction stored in memory");
        Ok(transaction)
    }

    async fn get(&self, id: i64) -> DbResult<Option<Transaction>> {
        Ok(self.tables.lock().await.transactions.get(&id).cloned())
    }

    async fn list(&self) -> DbResult<Vec<Transaction>> {
        let tables = self.tables.lock().await;
        let mut transactions: Vec<Transaction> = tables
            .transactions
            .values()
            .map(|tx| Transaction {
                details: Vec::new(),
                ..tx.clone()
            })
            .collect();

        transactions.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(transactions)
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        // Details live inside the transaction, so they go with it.
        self.tables
            .lock()
            .await
            .transactions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::not_found("Transaction", id))
    }
}

// =============================================================================
// Reports
// =============================================================================

#[async_trait]
impl ReportStore for MemoryStore {
    async fn sales_summary(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DbResult<SalesSummary> {
        let tables = self.tables.lock().await;

        let mut total_revenue: i64 = 0;
        let mut total_transactions: i64 = 0;
        let mut sold: BTreeMap<i64, i64> = BTreeMap::new();

        for tx in tables
            .transactions
            .values()
            .filter(|tx| tx.created_at >= start && tx.created_at < end)
        {
            total_revenue = total_revenue
                .checked_add(tx.total_amount)
                .ok_or_else(|| DbError::QueryFailed("bigint out of range".to_string()))?;
            total_transactions += 1;

            for detail in &tx.details {
                let qty = sold.entry(detail.product_id).or_insert(0);
                *qty = qty
                    .checked_add(detail.quantity)
                    .ok_or_else(|| DbError::QueryFailed("bigint out of range".to_string()))?;
            }
        }

        // Ascending id order plus a strict comparison keeps the lowest id on ties.
        let mut best: Option<(&Product, i64)> = None;
        for (product_id, qty) in &sold {
            let Some(product) = tables.products.get(product_id) else {
                continue;
            };
            if best.map_or(true, |(_, best_qty)| *qty > best_qty) {
                best = Some((product, *qty));
            }
        }

        Ok(SalesSummary {
            total_revenue,
            total_transactions,
            best_seller: best.map(|(product, quantity_sold)| BestSeller {
                name: product.name.clone(),
                quantity_sold,
            }),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
