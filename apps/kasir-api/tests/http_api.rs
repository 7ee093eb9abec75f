//! End-to-end tests of the HTTP surface against the in-memory store.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};
use tower::ServiceExt;

use kasir_api::{build_app, AppState};
use kasir_db::MemoryStore;

fn app() -> (Router, Arc<MemoryStore>) {
    let (state, store) = AppState::in_memory("Kasir API");
    (build_app(state, Duration::from_secs(5)), store)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn create_product(app: &Router, name: &str, price: f64, category_id: i64) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": name, "price": price, "stock": 10, "category_id": category_id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    body
}

#[tokio::test]
async fn health_reports_app_name() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::GET, "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "OK", "message": "Kasir API is running" }));
}

#[tokio::test]
async fn unknown_route_and_wrong_method() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::GET, "/api/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));

    let (status, _) = send(&app, Method::GET, "/elsewhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::PATCH, "/api/products", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn product_crud() {
    let (app, _) = app();

    let created = create_product(&app, "Kopi Susu", 15_000.0, 1).await;
    assert_eq!(created["id"], 1);

    let (status, body) = send(&app, Method::GET, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, created);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/products/1",
        Some(json!({ "name": "Kopi Gula Aren", "price": 18000, "stock": 4, "category_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Kopi Gula Aren");

    let (status, body) = send(&app, Method::DELETE, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Product deleted successfully");

    let (status, body) = send(&app, Method::GET, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, Method::DELETE, "/api/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn product_bad_input() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::GET, "/api/products/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid product ID");

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/products",
        Some(json!({ "name": " ", "price": 1000, "category_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name"));

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/products/9",
        Some(json!({ "name": "Teh", "price": 1000, "category_id": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn product_filters() {
    let (app, _) = app();
    create_product(&app, "Kopi Susu", 15_000.0, 1).await;
    create_product(&app, "kopi hitam", 8_000.0, 1).await;
    create_product(&app, "Teh Manis", 5_000.0, 2).await;

    let (_, body) = send(&app, Method::GET, "/api/products?name=KOPI", None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (_, body) = send(&app, Method::GET, "/api/products?category_id=2", None).await;
    assert_eq!(body[0]["name"], "Teh Manis");

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/products?min_price=6000&max_price=15000",
        None,
    )
    .await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Kopi Susu", "kopi hitam"]);

    // Unparsable values are ignored.
    let (status, body) = send(&app, Method::GET, "/api/products?category_id=x&min_price=", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn product_name_filter_keeps_spaces() {
    let (app, _) = app();
    create_product(&app, "Es Kopi", 12_000.0, 1).await;
    create_product(&app, "Kopi Susu", 15_000.0, 1).await;

    let (status, body) = send(&app, Method::GET, "/api/products?name=%20kopi", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Es Kopi"]);
}

#[tokio::test]
async fn category_round_trip() {
    let (app, _) = app();

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/categories",
        Some(json!({ "name": "Minuman" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(created.get("description").is_none());

    let (_, fetched) = send(&app, Method::GET, "/api/categories/1", None).await;
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/categories/1",
        Some(json!({ "name": "Minuman Dingin", "description": "Es" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, fetched) = send(&app, Method::GET, "/api/categories/1", None).await;
    assert_eq!(fetched, updated);
    assert_eq!(fetched["id"], 1);

    let (_, list) = send(&app, Method::GET, "/api/categories", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::DELETE, "/api/categories/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Category deleted successfully");

    let (status, _) = send(&app, Method::GET, "/api/categories/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::GET, "/api/categories/x", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid category ID");
}

#[tokio::test]
async fn checkout_creates_transaction() {
    let (app, _) = app();
    create_product(&app, "Beras 5kg", 90_000.0, 1).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({ "items": [{ "product_id": 1, "quantity": 2 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["total_amount"], 180_000);
    assert_eq!(body["details"][0]["subtotal"], 180_000);
    assert_eq!(body["details"][0]["quantity"], 2);

    let id = body["id"].as_i64().unwrap();
    let (status, fetched) = send(&app, Method::GET, &format!("/api/transactions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);

    // Stock is untouched by a sale.
    let (_, product) = send(&app, Method::GET, "/api/products/1", None).await;
    assert_eq!(product["stock"], 10);

    let (_, list) = send(&app, Method::GET, "/api/transactions", None).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert!(list[0].get("details").is_none());
}

#[tokio::test]
async fn checkout_rejections_persist_nothing() {
    let (app, store) = app();
    create_product(&app, "Beras 5kg", 90_000.0, 1).await;

    let (status, body) = send(&app, Method::POST, "/api/transactions", Some(json!({ "items": [] }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("at least one item"));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({ "items": [{ "product_id": 1, "quantity": 1 }, { "product_id": 42, "quantity": 1 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "product with ID 42 not found");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({ "items": [{ "product_id": 1, "quantity": 0 }] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, Method::GET, "/api/transactions", None).await;
    assert_eq!(list, json!([]));
    assert_eq!(store.detail_count().await, 0);
}

#[tokio::test]
async fn transaction_delete() {
    let (app, store) = app();
    create_product(&app, "Gula", 14_000.0, 1).await;
    let (_, tx) = send(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({ "items": [{ "product_id": 1, "quantity": 1 }] })),
    )
    .await;
    let uri = format!("/api/transactions/{}", tx["id"]);

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Transaction deleted successfully");
    assert_eq!(store.detail_count().await, 0);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, "/api/transactions/zz", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid transaction ID");
}

#[tokio::test]
async fn report_by_date_range() {
    let (app, store) = app();
    create_product(&app, "Kopi", 10_000.0, 1).await;
    create_product(&app, "Teh", 5_000.0, 1).await;

    store
        .set_now(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap())
        .await;
    send(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({ "items": [{ "product_id": 1, "quantity": 1 }, { "product_id": 2, "quantity": 3 }] })),
    )
    .await;
    store
        .set_now(Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap())
        .await;
    send(
        &app,
        Method::POST,
        "/api/transactions",
        Some(json!({ "items": [{ "product_id": 1, "quantity": 5 }] })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/report?start_date=2024-01-01&end_date=2024-01-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "total_revenue": 25_000,
            "total_transaksi": 1,
            "produk_terlaris": { "nama": "Teh", "qty_terjual": 3 },
            "start_date": "2024-01-01",
            "end_date": "2024-01-01",
        })
    );

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/report?start_date=2023-01-01&end_date=2023-12-31",
        None,
    )
    .await;
    assert_eq!(body["total_transaksi"], 0);
    assert!(body.get("produk_terlaris").is_none());
}

#[tokio::test]
async fn report_rejects_bad_dates() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::GET, "/api/report?start_date=2024-01-01", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "start_date and end_date are required (format: YYYY-MM-DD)"
    );

    let (status, _) = send(
        &app,
        Method::GET,
        "/api/report?start_date=01-01-2024&end_date=2024-01-31",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn report_today_is_ok() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::GET, "/api/report/hari-ini", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_transaksi"], 0);
    assert!(body["start_date"].is_string());
}
