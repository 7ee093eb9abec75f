//! # Application State
//!
//! Shared handles passed to every handler through axum's `State`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppState (Clone, cheap: every field is an Arc)                        │
//! │                                                                         │
//! │  products ────► Arc<dyn ProductStore>      ┐                            │
//! │  categories ──► Arc<dyn CategoryStore>     │  PostgreSQL repositories   │
//! │  transactions ► TransactionEngine          │  or one shared MemoryStore │
//! │  reports ─────► ReportAggregator           ┘                            │
//! │  app_name                                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use kasir_db::{CategoryStore, Database, MemoryStore, ProductStore, ReportStore, TransactionStore};

use crate::config::KasirConfig;
use crate::services::{ReportAggregator, TransactionEngine};

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductStore>,
    pub categories: Arc<dyn CategoryStore>,
    pub transactions: TransactionEngine,
    pub reports: ReportAggregator,
    pub app_name: Arc<str>,
}

impl AppState {
    /// Wires the stores together.
    pub fn new(
        products: Arc<dyn ProductStore>,
        categories: Arc<dyn CategoryStore>,
        transactions: Arc<dyn TransactionStore>,
        reports: Arc<dyn ReportStore>,
        app_name: impl Into<Arc<str>>,
    ) -> Self {
        AppState {
            transactions: TransactionEngine::new(products.clone(), transactions),
            reports: ReportAggregator::new(reports),
            products,
            categories,
            app_name: app_name.into(),
        }
    }

    /// PostgreSQL-backed state sharing one connection pool.
    pub fn from_database(db: &Database, config: &KasirConfig) -> Self {
        AppState::new(
            Arc::new(db.products()),
            Arc::new(db.categories()),
            Arc::new(db.transactions()),
            Arc::new(db.reports()),
            config.app_name.as_str(),
        )
    }

    /// State backed by a single [`MemoryStore`], which is returned too so
    /// callers can inspect or pin its clock.
    pub fn in_memory(app_name: &str) -> (Self, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let state = AppState::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            app_name,
        );
        (state, store)
    }
}
