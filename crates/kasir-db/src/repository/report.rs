//! # Report Repository
//!
//! Sales aggregation queries. Two round trips per report: one for revenue
//! and count, one for the best seller.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;

use crate::error::DbResult;
use crate::store::ReportStore;
use kasir_core::{BestSeller, SalesSummary};

/// Repository for report queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: PgPool) -> Self {
        ReportRepository { pool }
    }
}

#[async_trait]
impl ReportStore for ReportRepository {
    async fn sales_summary(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DbResult<SalesSummary> {
        debug!(%start, %end, "Aggregating sales");

        let (total_revenue, total_transactions): (i64, i64) = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(total_amount), 0)::BIGINT AS total_revenue,
                COUNT(*) AS total_transactions
            FROM transactions
            WHERE created_at >= $1 AND created_at < $2
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await?;

        let best_seller: Option<(String, i64)> = sqlx::query_as(
            r#"
            SELECT
                p.name,
                SUM(td.quantity)::BIGINT AS quantity_sold
            FROM transaction_details td
            JOIN transactions t ON td.transaction_id = t.id
            JOIN products p ON td.product_id = p.id
            WHERE t.created_at >= $1 AND t.created_at < $2
            GROUP BY p.id, p.name
            ORDER BY quantity_sold DESC, p.id ASC
            LIMIT 1
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_optional(&self.pool)
        .await?;

        Ok(SalesSummary {
            total_revenue,
            total_transactions,
            best_seller: best_seller.map(|(name, quantity_sold)| BestSeller {
                name,
                quantity_sold,
            }),
        })
    }
}
