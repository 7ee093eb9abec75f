//! # Transaction Repository
//!
//! Database operations for transactions and their detail rows.
//!
//! ## Atomic Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     create(&NewTransaction)                             │
//! │                                                                         │
//! │  BEGIN                                                                 │
//! │    INSERT INTO transactions (total_amount)                             │
//! │      RETURNING id, created_at ─────────────┐                           │
//! │                                            │ transaction_id            │
//! │    INSERT INTO transaction_details ◄───────┤ (one per line,            │
//! │    INSERT INTO transaction_details ◄───────┘  input order)             │
//! │  COMMIT                                                                │
//! │                                                                         │
//! │  Any error before COMMIT: the sqlx::Transaction is dropped and         │
//! │  PostgreSQL rolls back. The same happens if the request future is      │
//! │  cancelled mid-write.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::store::TransactionStore;
use kasir_core::{NewTransaction, Transaction, TransactionDetail};

const DETAIL_COLUMNS: &str = "id, transaction_id, product_id, quantity, subtotal";

/// Repository for transaction database operations.
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: PgPool) -> Self {
        TransactionRepository { pool }
    }

    /// Gets all detail rows of a transaction in insertion order.
    pub async fn get_details(&self, transaction_id: i64) -> DbResult<Vec<TransactionDetail>> {
        let details = sqlx::query_as::<_, TransactionDetail>(&format!(
            "SELECT {DETAIL_COLUMNS} FROM transaction_details WHERE transaction_id = $1 ORDER BY id"
        ))
        .bind(transaction_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(details)
    }
}

#[async_trait]
impl TransactionStore for TransactionRepository {
    async fn create(&self, new_tx: &NewTransaction) -> DbResult<Transaction> {
        debug!(
            total_amount = new_tx.total_amount(),
            lines = new_tx.len(),
            "Creating transaction"
        );

        let mut db_tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        let (id, created_at): (i64, DateTime<Utc>) = sqlx::query_as(
            r#"
            INSERT INTO transactions (total_amount)
            VALUES ($1)
            RETURNING id, created_at
            "#,
        )
        .bind(new_tx.total_amount())
        .fetch_one(&mut *db_tx)
        .await?;

        let mut details = Vec::with_capacity(new_tx.len());
        for line in new_tx.details() {
            let detail = sqlx::query_as::<_, TransactionDetail>(&format!(
                r#"
                INSERT INTO transaction_details (transaction_id, product_id, quantity, subtotal)
                VALUES ($1, $2, $3, $4)
                RETURNING {DETAIL_COLUMNS}
                "#
            ))
            .bind(id)
            .bind(line.product_id)
            .bind(line.quantity)
            .bind(line.subtotal)
            .fetch_one(&mut *db_tx)
            .await?;

            details.push(detail);
        }

        db_tx
            .commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(id, total_amount = new_tx.total_amount(), "Transaction committed");

        Ok(Transaction {
            id,
            total_amount: new_tx.total_amount(),
            created_at,
            details,
        })
    }

    async fn get(&self, id: i64) -> DbResult<Option<Transaction>> {
        let transaction = sqlx::query_as::<_, Transaction>(
            "SELECT id, total_amount, created_at FROM transactions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(mut transaction) = transaction else {
            return Ok(None);
        };

        transaction.details = self.get_details(id).await?;
        Ok(Some(transaction))
    }

    async fn list(&self) -> DbResult<Vec<Transaction>> {
        let transactions = sqlx::query_as::<_, Transaction>(
            r#"
            SELECT id, total_amount, created_at
            FROM transactions
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting transaction");

        // transaction_details rows go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Transaction", id));
        }

        Ok(())
    }
}
