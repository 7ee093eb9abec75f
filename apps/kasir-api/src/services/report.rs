//! # Report Aggregator
//!
//! Resolves a report request into a [`ReportPeriod`], asks the store for
//! the aggregates and labels the result.

use std::sync::Arc;

use chrono::{DateTime, Local, TimeZone};
use tracing::debug;

use kasir_core::{ReportPeriod, SalesReport};
use kasir_db::ReportStore;

use super::ServiceResult;

#[derive(Clone)]
pub struct ReportAggregator {
    reports: Arc<dyn ReportStore>,
}

impl ReportAggregator {
    pub fn new(reports: Arc<dyn ReportStore>) -> Self {
        ReportAggregator { reports }
    }

    /// Sales for the current local calendar day.
    pub async fn today(&self) -> ServiceResult<SalesReport> {
        self.today_at(&Local::now()).await
    }

    /// Sales for the calendar day containing `now`, in `now`'s time zone.
    pub async fn today_at<Tz>(&self, now: &DateTime<Tz>) -> ServiceResult<SalesReport>
    where
        Tz: TimeZone,
    {
        self.summarize(ReportPeriod::today(now)).await
    }

    /// Sales between two `YYYY-MM-DD` dates, both days inclusive.
    pub async fn by_date_range(&self, start: &str, end: &str) -> ServiceResult<SalesReport> {
        let period = ReportPeriod::from_date_strings(start, end)?;
        self.summarize(period).await
    }

    async fn summarize(&self, period: ReportPeriod) -> ServiceResult<SalesReport> {
        debug!(start = %period.start, end = %period.end, "Aggregating sales");
        let summary = self.reports.sales_summary(period.start, period.end).await?;
        Ok(SalesReport::from_summary(summary, &period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ServiceError;
    use chrono::{FixedOffset, Utc};
    use kasir_core::{CoreError, NewTransaction, ProductInput, ValidationError};
    use kasir_db::{MemoryStore, ProductStore, TransactionStore};

    async fn seeded() -> (Arc<MemoryStore>, ReportAggregator) {
        let store = Arc::new(MemoryStore::new());
        for (name, price) in [("Kopi", 10_000.0), ("Teh", 5_000.0)] {
            ProductStore::create(
                store.as_ref(),
                &ProductInput {
                    name: name.to_string(),
                    price,
                    stock: 5,
                    category_id: 1,
                },
            )
            .await
            .unwrap();
        }
        let aggregator = ReportAggregator::new(store.clone());
        (store, aggregator)
    }

    async fn sell(store: &MemoryStore, at: DateTime<Utc>, lines: &[(i64, i64)]) {
        let mut tx = NewTransaction::new();
        for &(product_id, quantity) in lines {
            let product = ProductStore::get(store, product_id).await.unwrap().unwrap();
            tx.add_line(&product, quantity).unwrap();
        }
        store.set_now(at).await;
        TransactionStore::create(store, &tx).await.unwrap();
    }

    #[tokio::test]
    async fn test_date_range_includes_whole_end_day() {
        let (store, aggregator) = seeded().await;
        let jan1 = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 0).unwrap();
        let jan2 = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        sell(&store, jan1, &[(1, 2)]).await;
        sell(&store, jan2, &[(2, 1)]).await;

        let report = aggregator
            .by_date_range("2024-01-01", "2024-01-01")
            .await
            .unwrap();
        assert_eq!(report.total_transactions, 1);
        assert_eq!(report.total_revenue, 20_000);
        assert_eq!(report.start_date, "2024-01-01");
        assert_eq!(report.end_date, "2024-01-01");

        let both = aggregator
            .by_date_range("2024-01-01", "2024-01-02")
            .await
            .unwrap();
        assert_eq!(both.total_transactions, 2);
        assert_eq!(both.total_revenue, 25_000);
    }

    #[tokio::test]
    async fn test_best_seller_by_quantity() {
        let (store, aggregator) = seeded().await;
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        sell(&store, at, &[(1, 1), (2, 3)]).await;

        let report = aggregator
            .by_date_range("2024-05-01", "2024-05-01")
            .await
            .unwrap();
        let best = report.best_seller.unwrap();
        assert_eq!(best.name, "Teh");
        assert_eq!(best.quantity_sold, 3);
    }

    #[tokio::test]
    async fn test_empty_period() {
        let (_store, aggregator) = seeded().await;

        let report = aggregator
            .by_date_range("2030-01-01", "2030-01-31")
            .await
            .unwrap();
        assert_eq!(report.total_revenue, 0);
        assert_eq!(report.total_transactions, 0);
        assert!(report.best_seller.is_none());
    }

    #[tokio::test]
    async fn test_start_after_end_is_empty() {
        let (store, aggregator) = seeded().await;
        sell(&store, Utc.with_ymd_and_hms(2024, 1, 5, 8, 0, 0).unwrap(), &[(1, 1)]).await;

        let report = aggregator
            .by_date_range("2024-01-10", "2024-01-01")
            .await
            .unwrap();
        assert_eq!(report.total_transactions, 0);
    }

    #[tokio::test]
    async fn test_missing_and_malformed_dates() {
        let (_store, aggregator) = seeded().await;

        assert!(matches!(
            aggregator.by_date_range("", "2024-01-01").await.unwrap_err(),
            ServiceError::Core(CoreError::Validation(ValidationError::MissingDateRange))
        ));
        assert!(matches!(
            aggregator
                .by_date_range("2024-13-01", "2024-01-01")
                .await
                .unwrap_err(),
            ServiceError::Core(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
    }

    #[tokio::test]
    async fn test_today_uses_local_day_of_now() {
        let (store, aggregator) = seeded().await;
        let wib = FixedOffset::east_opt(7 * 3600).unwrap();

        // 2024-03-15 06:00 WIB
        sell(&store, Utc.with_ymd_and_hms(2024, 3, 14, 23, 0, 0).unwrap(), &[(1, 1)]).await;
        // 2024-03-14 23:00 WIB
        sell(&store, Utc.with_ymd_and_hms(2024, 3, 14, 16, 0, 0).unwrap(), &[(2, 1)]).await;

        let now = wib.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
        let report = aggregator.today_at(&now).await.unwrap();

        assert_eq!(report.total_transactions, 1);
        assert_eq!(report.total_revenue, 10_000);
        assert_eq!(report.start_date, "2024-03-15");
        assert_eq!(report.end_date, "2024-03-15");
    }
}
