//! # Routes
//!
//! ```text
//! /api
//! ├── /health                      GET
//! ├── /products                    GET (filters), POST
//! │   └── /{id}                    GET, PUT, DELETE
//! ├── /categories                  GET, POST
//! │   └── /{id}                    GET, PUT, DELETE
//! ├── /transactions                GET, POST
//! │   └── /{id}                    GET, DELETE
//! ├── /report                      GET ?start_date&end_date
//! └── /report/hari-ini             GET
//! ```
//!
//! Anything else is a 404 `{"error": "Not found"}`. A known path with the
//! wrong method is a 405.

pub mod categories;
pub mod health;
pub mod products;
pub mod reports;
pub mod transactions;

use axum::{routing::get, Router};

use crate::error::ApiError;
use crate::state::AppState;

/// The full route table with state applied.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health::health))
        .route("/products", get(products::list).post(products::create))
        .route(
            "/products/{id}",
            get(products::get)
                .put(products::update)
                .delete(products::delete),
        )
        .route("/categories", get(categories::list).post(categories::create))
        .route(
            "/categories/{id}",
            get(categories::get)
                .put(categories::update)
                .delete(categories::delete),
        )
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route(
            "/transactions/{id}",
            get(transactions::get).delete(transactions::delete),
        )
        .route("/report", get(reports::by_date_range))
        .route("/report/hari-ini", get(reports::today));

    Router::new()
        .nest("/api", api)
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::not_found("Not found")
}
