//! # kasir-api: HTTP Server for Kasir
//!
//! JSON REST API for a small point of sale: product and category
//! management, atomic sales transactions and sales reports.
//!
//! ## Request Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  TcpListener ──► TraceLayer ──► TimeoutLayer ──► Router (/api/...)     │
//! │                                                      │                  │
//! │                     ┌────────────────────────────────┼───────────────┐  │
//! │                     ▼                                ▼               ▼  │
//! │            products / categories          TransactionEngine   ReportAggregator
//! │                     │                                │               │  │
//! │                     └──────────────► kasir-db stores ◄───────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Environment configuration
//! - [`error`] - `ApiError` and its `{"error": ...}` response
//! - [`routes`] - Route table and handlers
//! - [`services`] - Transaction engine and report aggregator
//! - [`state`] - Shared handler state

pub mod config;
pub mod error;
pub mod extract;
pub mod routes;
pub mod services;
pub mod state;

use std::time::Duration;

use axum::Router;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

pub use config::{ConfigError, KasirConfig};
pub use error::ApiError;
pub use state::AppState;

/// The application with its middleware stack.
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    routes::router(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kasir=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
