//! Transaction handlers. The work happens in
//! [`TransactionEngine`](crate::services::TransactionEngine).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use kasir_core::validation::parse_id;
use kasir_core::{CreateTransactionRequest, Transaction};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Transaction>>, ApiError> {
    Ok(Json(state.transactions.list().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    let id = parse_id("transaction", &id)?;
    Ok(Json(state.transactions.get(id).await?))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let transaction = state.transactions.create(&request).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id("transaction", &id)?;
    state.transactions.delete(id).await?;
    Ok(Json(json!({ "message": "Transaction deleted successfully" })))
}
