//! Category handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use kasir_core::validation::{parse_id, validate_category_input};
use kasir_core::{Category, CategoryInput};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.categories.list().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let id = parse_id("category", &id)?;
    state
        .categories
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Category not found"))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CategoryInput>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    validate_category_input(&input)?;
    let category = state.categories.create(&input).await?;
    info!(id = category.id, name = %category.name, "Category created");
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<CategoryInput>,
) -> Result<Json<Category>, ApiError> {
    let id = parse_id("category", &id)?;
    validate_category_input(&input)?;
    Ok(Json(state.categories.update(id, &input).await?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id("category", &id)?;
    state.categories.delete(id).await?;
    info!(id, "Category deleted");
    Ok(Json(json!({ "message": "Category deleted successfully" })))
}
