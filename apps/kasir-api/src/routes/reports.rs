//! Sales report handlers.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};

use kasir_core::SalesReport;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/report/hari-ini`: today's sales by the server's local clock.
pub async fn today(State(state): State<AppState>) -> Result<Json<SalesReport>, ApiError> {
    Ok(Json(state.reports.today().await?))
}

/// `GET /api/report?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD`
pub async fn by_date_range(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<SalesReport>, ApiError> {
    let field = |key: &str| params.get(key).map(String::as_str).unwrap_or_default();

    let report = state
        .reports
        .by_date_range(field("start_date"), field("end_date"))
        .await?;
    Ok(Json(report))
}
