//! PostgreSQL repository tests.
//!
//! These run only when `KASIR_TEST_DATABASE_URL` points at a scratch
//! database; every test truncates all tables first.
//!
//! ```bash
//! KASIR_TEST_DATABASE_URL=postgres://postgres@localhost/kasir_test cargo test -p kasir-db
//! ```

use chrono::{Duration, TimeZone, Utc};
use std::sync::OnceLock;
use tokio::sync::{Mutex, MutexGuard};

use kasir_core::{
    CategoryInput, NewTransaction, NewTransactionDetail, ProductFilter, ProductInput,
};
use kasir_db::{
    CategoryStore, Database, DbConfig, DbError, ProductStore, ReportStore, TransactionStore,
};

/// Tests share one database, so they take turns.
fn db_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

async fn setup() -> Option<(Database, MutexGuard<'static, ()>)> {
    let Ok(url) = std::env::var("KASIR_TEST_DATABASE_URL") else {
        eprintln!("KASIR_TEST_DATABASE_URL not set, skipping");
        return None;
    };

    let guard = db_lock().lock().await;
    let db = Database::new(DbConfig::from_url(url).max_connections(2))
        .await
        .unwrap();

    sqlx::query(
        "TRUNCATE transaction_details, transactions, products, categories RESTART IDENTITY CASCADE",
    )
    .execute(db.pool())
    .await
    .unwrap();

    Some((db, guard))
}

fn product(name: &str, price: f64, category_id: i64) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        price,
        stock: 10,
        category_id,
    }
}

fn line(product_id: i64, quantity: i64, subtotal: i64) -> NewTransactionDetail {
    NewTransactionDetail {
        product_id,
        quantity,
        subtotal,
    }
}

async fn detail_rows(db: &Database) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM transaction_details")
        .fetch_one(db.pool())
        .await
        .unwrap()
}

#[tokio::test]
async fn product_crud_and_filters() {
    let Some((db, _guard)) = setup().await else {
        return;
    };
    let products = db.products();

    let kopi = products.create(&product("Kopi Susu", 15_000.0, 1)).await.unwrap();
    products.create(&product("kopi hitam", 8_000.0, 1)).await.unwrap();
    products.create(&product("Teh 100%", 5_000.0, 2)).await.unwrap();

    assert_eq!(products.get(kopi.id).await.unwrap(), Some(kopi.clone()));

    let by_name = products.list(&ProductFilter::new().name("KOPI")).await.unwrap();
    assert_eq!(by_name.len(), 2);
    assert!(by_name[0].id < by_name[1].id);

    // '%' is matched literally
    let literal = products.list(&ProductFilter::new().name("%")).await.unwrap();
    assert_eq!(literal.len(), 1);
    assert_eq!(literal[0].name, "Teh 100%");

    let ranged = products
        .list(&ProductFilter::new().min_price(8_000.0).max_price(15_000.0).category_id(1))
        .await
        .unwrap();
    assert_eq!(ranged.len(), 2);

    let updated = products
        .update(kopi.id, &product("Kopi Susu Gula Aren", 18_000.0, 1))
        .await
        .unwrap();
    assert_eq!(updated.id, kopi.id);
    assert_eq!(updated.price, 18_000.0);

    products.delete(kopi.id).await.unwrap();
    assert!(products.get(kopi.id).await.unwrap().is_none());
    assert!(products.delete(kopi.id).await.unwrap_err().is_not_found());
    assert!(products
        .update(kopi.id, &product("x", 1.0, 1))
        .await
        .unwrap_err()
        .is_not_found());
}

#[tokio::test]
async fn category_round_trip() {
    let Some((db, _guard)) = setup().await else {
        return;
    };
    let categories = db.categories();

    let created = categories
        .create(&CategoryInput {
            name: "Minuman".to_string(),
            description: None,
        })
        .await
        .unwrap();
    assert_eq!(categories.get(created.id).await.unwrap(), Some(created.clone()));

    let updated = categories
        .update(
            created.id,
            &CategoryInput {
                name: "Minuman Dingin".to_string(),
                description: Some("Es".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(categories.get(created.id).await.unwrap(), Some(updated));

    categories.delete(created.id).await.unwrap();
    assert!(categories.get(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn transaction_is_atomic_and_cascades() {
    let Some((db, _guard)) = setup().await else {
        return;
    };
    let transactions = db.transactions();

    let tx = transactions
        .create(&NewTransaction::from_details(vec![line(1, 2, 180_000), line(2, 1, 5_000)]).unwrap())
        .await
        .unwrap();
    assert_eq!(tx.total_amount, 185_000);
    assert_eq!(tx.details.len(), 2);
    assert!(tx.details.iter().all(|d| d.transaction_id == tx.id));
    assert_eq!(transactions.get(tx.id).await.unwrap(), Some(tx.clone()));

    // The second line violates CHECK (quantity > 0): nothing may remain.
    let bad = NewTransaction::from_details(vec![line(1, 1, 100), line(1, 0, 0)]).unwrap();
    let err = transactions.create(&bad).await.unwrap_err();
    assert!(matches!(err, DbError::ConstraintViolation { .. }), "{err:?}");
    assert_eq!(transactions.list().await.unwrap().len(), 1);
    assert_eq!(detail_rows(&db).await, 2);

    transactions.delete(tx.id).await.unwrap();
    assert!(transactions.get(tx.id).await.unwrap().is_none());
    assert_eq!(detail_rows(&db).await, 0);
    assert!(transactions.delete(tx.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn sales_summary_respects_window() {
    let Some((db, _guard)) = setup().await else {
        return;
    };
    let kopi = db.products().create(&product("Kopi", 10_000.0, 1)).await.unwrap();
    let teh = db.products().create(&product("Teh", 5_000.0, 1)).await.unwrap();

    let transactions = db.transactions();
    let inside = transactions
        .create(&NewTransaction::from_details(vec![line(kopi.id, 1, 10_000), line(teh.id, 4, 20_000)]).unwrap())
        .await
        .unwrap();
    let outside = transactions
        .create(&NewTransaction::from_details(vec![line(kopi.id, 9, 90_000)]).unwrap())
        .await
        .unwrap();

    let day = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    for (id, at) in [
        (inside.id, day + Duration::hours(12)),
        (outside.id, day + Duration::hours(24)),
    ] {
        sqlx::query("UPDATE transactions SET created_at = $2 WHERE id = $1")
            .bind(id)
            .bind(at)
            .execute(db.pool())
            .await
            .unwrap();
    }

    let summary = db
        .reports()
        .sales_summary(day, day + Duration::hours(24))
        .await
        .unwrap();
    assert_eq!(summary.total_transactions, 1);
    assert_eq!(summary.total_revenue, 30_000);
    let best = summary.best_seller.unwrap();
    assert_eq!(best.name, "Teh");
    assert_eq!(best.quantity_sold, 4);

    let empty = db
        .reports()
        .sales_summary(day - Duration::days(7), day)
        .await
        .unwrap();
    assert_eq!(empty.total_revenue, 0);
    assert_eq!(empty.total_transactions, 0);
    assert!(empty.best_seller.is_none());
}
