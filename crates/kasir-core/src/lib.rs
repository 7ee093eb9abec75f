//! # kasir-core: Pure Business Logic for Kasir
//!
//! Everything here is deterministic and free of I/O: domain types, the
//! integer money type used for line pricing, input validation and the date
//! math behind sales reports.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Kasir Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    kasir-api (axum)                             │   │
//! │  │    routes ──► TransactionEngine / ReportAggregator ──► stores   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kasir-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │ validation│  │  report   │  │   │
//! │  │   │  Product  │  │   Money   │  │   rules   │  │  Period   │  │   │
//! │  │   │Transaction│  │  pricing  │  │  parsing  │  │ SalesRpt  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kasir-db (Database Layer)                    │   │
//! │  │         PostgreSQL repositories, in-memory store, migrations    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, Transaction, ...)
//! - [`money`] - Integer money and the price truncation rule
//! - [`transaction`] - Building a priced transaction from requested items
//! - [`report`] - Report periods and the sales report shape
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and parsing
//!
//! ## Example Usage
//!
//! ```rust
//! use kasir_core::money::Money;
//!
//! // Prices carry decimals, line pricing truncates to whole units first.
//! let unit = Money::from_price(90_000.75).unwrap();
//! let subtotal = unit.checked_mul(2).unwrap();
//! assert_eq!(subtotal.units(), 180_000);
//! ```

pub mod error;
pub mod money;
pub mod report;
pub mod transaction;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use report::{BestSeller, ReportPeriod, SalesReport, SalesSummary};
pub use transaction::{NewTransaction, NewTransactionDetail};
pub use types::*;
