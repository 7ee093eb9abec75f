//! # Seed Data Generator
//!
//! Populates the database with sample categories and products for development.
//!
//! ## Usage
//! ```bash
//! # Uses DATABASE_URL (a .env file is honoured)
//! cargo run -p kasir-db --bin seed
//!
//! # Explicit connection string
//! cargo run -p kasir-db --bin seed -- --url postgres://postgres@localhost/kasir
//! ```
//!
//! Nothing is inserted when the products table already has rows.

use anyhow::{bail, Context};
use std::env;

use kasir_core::validation::validate_product_input;
use kasir_core::{CategoryInput, ProductInput};
use kasir_db::{CategoryStore, Database, DbConfig, ProductStore};

/// Sample catalogue: category, description, products (name, price, stock).
const CATALOGUE: &[(&str, &str, &[(&str, f64, i64)])] = &[
    (
        "Minuman",
        "Minuman panas dan dingin",
        &[
            ("Kopi Hitam", 8_000.0, 100),
            ("Kopi Susu", 15_000.0, 80),
            ("Teh Manis", 5_000.0, 120),
            ("Es Jeruk", 7_000.0, 60),
            ("Air Mineral 600ml", 4_000.0, 200),
        ],
    ),
    (
        "Makanan",
        "Makanan berat",
        &[
            ("Nasi Goreng", 20_000.0, 40),
            ("Mie Goreng", 18_000.0, 40),
            ("Ayam Geprek", 22_000.0, 30),
        ],
    ),
    (
        "Camilan",
        "Makanan ringan",
        &[
            ("Roti Bakar", 12_000.0, 25),
            ("Pisang Goreng", 10_000.0, 35),
            ("Kentang Goreng", 13_500.0, 30),
        ],
    ),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args: Vec<String> = env::args().collect();
    let mut url = env::var("DATABASE_URL").ok();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--url" | "-u" => {
                if i + 1 < args.len() {
                    url = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Kasir Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -u, --url <URL>    PostgreSQL connection string (default: $DATABASE_URL)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }

    let Some(url) = url else {
        bail!("no database given: set DATABASE_URL or pass --url");
    };

    println!("Kasir Seed Data Generator");
    println!("=========================");

    let config = DbConfig::from_url(url);
    println!("Database: {}", config.describe());

    let db = Database::new(config)
        .await
        .context("connecting to the database")?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {existing} products");
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    let categories = db.categories();
    let products = db.products();
    let mut generated = 0usize;

    for (category_name, description, items) in CATALOGUE {
        let category = categories
            .create(&CategoryInput {
                name: category_name.to_string(),
                description: Some(description.to_string()),
            })
            .await
            .with_context(|| format!("inserting category {category_name}"))?;

        for (name, price, stock) in items.iter() {
            let input = ProductInput {
                name: name.to_string(),
                price: *price,
                stock: *stock,
                category_id: category.id,
            };
            validate_product_input(&input)?;

            products
                .create(&input)
                .await
                .with_context(|| format!("inserting product {name}"))?;
            generated += 1;
        }

        println!("  {} → {} products", category.name, items.len());
    }

    println!();
    println!("✓ Seeded {} categories, {generated} products", CATALOGUE.len());

    db.close().await;
    Ok(())
}
