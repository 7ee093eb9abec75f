//! # Transaction Engine
//!
//! Creates, reads and deletes sales.
//!
//! ## Create Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/transactions {items: [{product_id, quantity}, ...]}          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  items empty? ──────────────────────────► ValidationError (400)        │
//! │       │                                                                 │
//! │       ▼  for each item, in order                                       │
//! │  ProductStore::get(product_id)                                         │
//! │       ├── None ─────────────────────────► ProductNotFound (400)        │
//! │       ▼                                                                 │
//! │  NewTransaction::add_line(&product, qty)                               │
//! │       ├── qty <= 0 / overflow ──────────► ValidationError (400)        │
//! │       ▼                                                                 │
//! │  TransactionStore::create(&priced)   ← single atomic write             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Transaction {id, total_amount, created_at, details[]}  (201)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is written until every line has been priced. Product stock is
//! left untouched.

use std::sync::Arc;
use tracing::{debug, info};

use kasir_core::{CoreError, CreateTransactionRequest, NewTransaction, Transaction, ValidationError};
use kasir_db::{DbError, ProductStore, TransactionStore};

use super::ServiceResult;

/// Prices requested items and records them as one transaction.
#[derive(Clone)]
pub struct TransactionEngine {
    products: Arc<dyn ProductStore>,
    transactions: Arc<dyn TransactionStore>,
}

impl TransactionEngine {
    pub fn new(products: Arc<dyn ProductStore>, transactions: Arc<dyn TransactionStore>) -> Self {
        TransactionEngine {
            products,
            transactions,
        }
    }

    /// Validates, prices and persists a transaction.
    pub async fn create(&self, request: &CreateTransactionRequest) -> ServiceResult<Transaction> {
        if request.items.is_empty() {
            return Err(ValidationError::EmptyTransaction.into());
        }

        let mut priced = NewTransaction::new();
        for item in &request.items {
            let product = self
                .products
                .get(item.product_id)
                .await?
                .ok_or(CoreError::ProductNotFound(item.product_id))?;

            priced.add_line(&product, item.quantity)?;
            debug!(
                product_id = product.id,
                quantity = item.quantity,
                "Line priced"
            );
        }

        let transaction = self.transactions.create(&priced).await?;
        info!(
            id = transaction.id,
            total_amount = transaction.total_amount,
            lines = transaction.details.len(),
            "Transaction created"
        );

        Ok(transaction)
    }

    /// Fetches a transaction with its details.
    pub async fn get(&self, id: i64) -> ServiceResult<Transaction> {
        let transaction = self
            .transactions
            .get(id)
            .await?
            .ok_or_else(|| DbError::not_found("Transaction", id))?;

        Ok(transaction)
    }

    /// Lists transactions newest first, without details.
    pub async fn list(&self) -> ServiceResult<Vec<Transaction>> {
        Ok(self.transactions.list().await?)
    }

    /// Deletes a transaction and its details.
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.transactions.delete(id).await?;
        info!(id, "Transaction deleted");
        Ok(())
    }
}
