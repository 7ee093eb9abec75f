//! # kasir-db: Database Layer for Kasir
//!
//! This crate provides persistence for the Kasir POS backend: PostgreSQL
//! repositories built on sqlx, plus an in-memory store with the same
//! contracts.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kasir Data Flow                                  │
//! │                                                                         │
//! │  axum handler / TransactionEngine / ReportAggregator                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     kasir-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (store impl) │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ PgPool        │◄───│ ProductRepo   │    │ 0001_initial │  │   │
//! │  │   │ DbConfig      │    │ CategoryRepo  │    │   _schema    │  │   │
//! │  │   │               │    │ Transaction…  │    │              │  │   │
//! │  │   └───────────────┘    │ ReportRepo    │    └──────────────┘  │   │
//! │  │                        └───────────────┘                      │   │
//! │  │   store.rs: ProductStore, CategoryStore, TransactionStore,    │   │
//! │  │             ReportStore        memory.rs: MemoryStore         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     PostgreSQL                                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`store`] - Store traits shared by both backends
//! - [`repository`] - PostgreSQL implementations
//! - [`memory`] - In-memory implementation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kasir_db::{Database, DbConfig, ProductStore};
//!
//! let db = Database::new(DbConfig::from_url("postgres://localhost/kasir")).await?;
//! let product = db.products().get(1).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use memory::MemoryStore;
pub use pool::{Database, DbConfig};
pub use store::{CategoryStore, ProductStore, ReportStore, TransactionStore};

// Repository re-exports for convenience
pub use repository::category::CategoryRepository;
pub use repository::product::ProductRepository;
pub use repository::report::ReportRepository;
pub use repository::transaction::TransactionRepository;

// sqlx's SSL mode type is part of DbConfig's public API
pub use sqlx::postgres::PgSslMode;
