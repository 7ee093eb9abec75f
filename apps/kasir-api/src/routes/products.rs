//! Product handlers.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use kasir_core::validation::{parse_id, validate_product_input};
use kasir_core::{Product, ProductFilter, ProductInput};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;

/// `GET /api/products?name=&category_id=&min_price=&max_price=`
///
/// Values that do not parse are ignored rather than rejected.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let filter = filter_from_query(&params);
    Ok(Json(state.products.list(&filter).await?))
}

/// `GET /api/products/{id}`
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id("product", &id)?;
    state
        .products
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Product not found"))
}

/// `POST /api/products`
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProductInput>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    validate_product_input(&input)?;
    let product = state.products.create(&input).await?;
    info!(id = product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /api/products/{id}`
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ProductInput>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id("product", &id)?;
    validate_product_input(&input)?;
    Ok(Json(state.products.update(id, &input).await?))
}

/// `DELETE /api/products/{id}`
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = parse_id("product", &id)?;
    state.products.delete(id).await?;
    info!(id, "Product deleted");
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}

fn filter_from_query(params: &HashMap<String, String>) -> ProductFilter {
    let number = |key: &str| params.get(key).and_then(|v| v.trim().parse::<f64>().ok());

    let mut filter = ProductFilter::new();
    if let Some(name) = params.get("name") {
        filter = filter.name(name.as_str());
    }
    if let Some(id) = params
        .get("category_id")
        .and_then(|v| v.trim().parse::<i64>().ok())
    {
        filter = filter.category_id(id);
    }
    if let Some(min) = number("min_price") {
        filter = filter.min_price(min);
    }
    if let Some(max) = number("max_price") {
        filter = filter.max_price(max);
    }
    filter
}
