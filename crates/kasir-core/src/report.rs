//! # Sales Reports
//!
//! Report periods and the shape of a sales report.
//!
//! ## Periods
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every report covers a half-open interval [start, end).                 │
//! │                                                                         │
//! │  Today (local clock)                                                    │
//! │    start = local midnight of "now"                                      │
//! │    end   = start + 24h                                                  │
//! │    labels: start date, current date                                     │
//! │                                                                         │
//! │  Date range ("YYYY-MM-DD", "YYYY-MM-DD")                                │
//! │    start = start date at 00:00 UTC                                      │
//! │    end   = end date at 00:00 UTC + 24h   (whole end day included)       │
//! │    labels: the input strings, unchanged                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here reads the clock; callers pass "now" in.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{parse_date, DATE_FORMAT};

// =============================================================================
// Report Period
// =============================================================================

/// The interval a report covers, plus the labels echoed in the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPeriod {
    /// Inclusive lower bound.
    pub start: DateTime<Utc>,
    /// Exclusive upper bound.
    pub end: DateTime<Utc>,
    pub start_label: String,
    pub end_label: String,
}

impl ReportPeriod {
    /// The calendar day containing `now`, in `now`'s own time zone.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{FixedOffset, TimeZone};
    /// use kasir_core::ReportPeriod;
    ///
    /// let wib = FixedOffset::east_opt(7 * 3600).unwrap();
    /// let now = wib.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
    /// let period = ReportPeriod::today(&now);
    ///
    /// assert_eq!(period.start_label, "2024-03-15");
    /// assert_eq!(period.start.to_rfc3339(), "2024-03-14T17:00:00+00:00");
    /// assert_eq!(period.end.to_rfc3339(), "2024-03-15T17:00:00+00:00");
    /// ```
    pub fn today<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let midnight = now.date_naive().and_time(NaiveTime::MIN);

        // A DST jump can skip local midnight entirely; fall back to
        // subtracting the elapsed local time of day.
        let start = tz
            .from_local_datetime(&midnight)
            .earliest()
            .unwrap_or_else(|| now.clone() - (now.naive_local().time() - NaiveTime::MIN));

        let start_label = start.date_naive().format(DATE_FORMAT).to_string();
        let end_label = now.date_naive().format(DATE_FORMAT).to_string();
        let start = start.with_timezone(&Utc);

        Self {
            start,
            end: start + Duration::hours(24),
            start_label,
            end_label,
        }
    }

    /// Builds a period from two `YYYY-MM-DD` literals.
    ///
    /// Both dates are required. A start after the end is allowed and simply
    /// yields an empty report.
    pub fn from_date_strings(start: &str, end: &str) -> Result<Self, ValidationError> {
        if start.trim().is_empty() || end.trim().is_empty() {
            return Err(ValidationError::MissingDateRange);
        }

        let start_at = parse_date("start_date", start)?;
        let end_at = parse_date("end_date", end)? + Duration::hours(24);

        Ok(Self {
            start: start_at,
            end: end_at,
            start_label: start.to_string(),
            end_label: end.to_string(),
        })
    }

    /// True when `at` falls inside `[start, end)`.
    pub fn contains(&self, at: &DateTime<Utc>) -> bool {
        *at >= self.start && *at < self.end
    }
}

// =============================================================================
// Aggregates
// =============================================================================

/// The product with the largest summed quantity in a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestSeller {
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "qty_terjual")]
    pub quantity_sold: i64,
}

/// Raw aggregates returned by a report store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesSummary {
    pub total_revenue: i64,
    pub total_transactions: i64,
    pub best_seller: Option<BestSeller>,
}

/// The report returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReport {
    pub total_revenue: i64,
    #[serde(rename = "total_transaksi")]
    pub total_transactions: i64,
    #[serde(
        rename = "produk_terlaris",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub best_seller: Option<BestSeller>,
    pub start_date: String,
    pub end_date: String,
}

impl SalesReport {
    /// Labels a store summary with its period.
    pub fn from_summary(summary: SalesSummary, period: &ReportPeriod) -> Self {
        Self {
            total_revenue: summary.total_revenue,
            total_transactions: summary.total_transactions,
            best_seller: summary.best_seller,
            start_date: period.start_label.clone(),
            end_date: period.end_label.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_today_in_utc() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap();
        let period = ReportPeriod::today(&now);

        assert_eq!(period.start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(period.end, Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap());
        assert_eq!(period.start_label, "2024-01-01");
        assert_eq!(period.end_label, "2024-01-01");
        assert!(period.contains(&now));
    }

    #[test]
    fn test_today_uses_local_midnight() {
        let wib = FixedOffset::east_opt(7 * 3600).unwrap();
        let now = wib.with_ymd_and_hms(2024, 6, 1, 3, 0, 0).unwrap();
        let period = ReportPeriod::today(&now);

        // 2024-06-01 00:00 +07:00
        assert_eq!(
            period.start,
            Utc.with_ymd_and_hms(2024, 5, 31, 17, 0, 0).unwrap()
        );
        assert_eq!(period.start_label, "2024-06-01");
    }

    #[test]
    fn test_date_range_includes_whole_end_day() {
        let period = ReportPeriod::from_date_strings("2024-01-01", "2024-01-01").unwrap();

        let inside = Utc.with_ymd_and_hms(2024, 1, 1, 23, 59, 59).unwrap();
        let before = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

        assert!(period.contains(&inside));
        assert!(!period.contains(&before));
        assert!(!period.contains(&after));
        assert_eq!(period.start_label, "2024-01-01");
        assert_eq!(period.end_label, "2024-01-01");
    }

    #[test]
    fn test_date_range_errors() {
        assert_eq!(
            ReportPeriod::from_date_strings("", "2024-01-01"),
            Err(ValidationError::MissingDateRange)
        );
        assert_eq!(
            ReportPeriod::from_date_strings("2024-01-01", " "),
            Err(ValidationError::MissingDateRange)
        );
        assert!(matches!(
            ReportPeriod::from_date_strings("2024-13-01", "2024-01-01"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            ReportPeriod::from_date_strings("-0001-01-01", "+2024-01-01"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            ReportPeriod::from_date_strings("2024-1-1", "2024-01-31"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_report_wire_names() {
        let period = ReportPeriod::from_date_strings("2024-01-01", "2024-01-31").unwrap();
        let summary = SalesSummary {
            total_revenue: 180_000,
            total_transactions: 1,
            best_seller: Some(BestSeller {
                name: "Kopi".to_string(),
                quantity_sold: 2,
            }),
        };

        let json = serde_json::to_value(SalesReport::from_summary(summary, &period)).unwrap();
        assert_eq!(json["total_revenue"], 180_000);
        assert_eq!(json["total_transaksi"], 1);
        assert_eq!(json["produk_terlaris"]["nama"], "Kopi");
        assert_eq!(json["produk_terlaris"]["qty_terjual"], 2);
        assert_eq!(json["start_date"], "2024-01-01");
        assert_eq!(json["end_date"], "2024-01-31");
    }

    #[test]
    fn test_empty_report_omits_best_seller() {
        let period = ReportPeriod::from_date_strings("2024-01-01", "2024-01-01").unwrap();
        let report = SalesReport::from_summary(SalesSummary::default(), &period);
        let json = serde_json::to_value(report).unwrap();

        assert_eq!(json["total_revenue"], 0);
        assert_eq!(json["total_transaksi"], 0);
        assert!(json.get("produk_terlaris").is_none());
    }
}
