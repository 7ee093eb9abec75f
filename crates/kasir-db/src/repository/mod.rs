//! # Repository Module
//!
//! PostgreSQL implementations of the store traits.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler / service                                                │
//! │       │                                                                 │
//! │       │  state.products.get(id)       (Arc<dyn ProductStore>)          │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list(&self, filter)                                               │
//! │  ├── get(&self, id)                                                    │
//! │  ├── create(&self, input)                                              │
//! │  ├── update(&self, id, input)                                          │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  PostgreSQL                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and filters
//! - [`CategoryRepository`](category::CategoryRepository) - Category CRUD
//! - [`TransactionRepository`](transaction::TransactionRepository) - Atomic transaction writes
//! - [`ReportRepository`](report::ReportRepository) - Sales aggregation

pub mod category;
pub mod product;
pub mod report;
pub mod transaction;
