//! # Seed Data Generator
//!
//! Populates a database with demo products for manual poking.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default) into ./shelf_dev.db
//! cargo run -p shelf-db --bin seed
//!
//! # Custom amount and path
//! cargo run -p shelf-db --bin seed -- --count 200 --db ./data/shelf.db
//! ```

use std::env;

use shelf_core::{Money, ProductDraft};
use shelf_db::{Database, DbConfig};
use shelf_store::ProductStore;
use tracing::info;

/// Base names combined with size variants to generate demo products.
const NAMES: &[&str] = &[
    "Pen",
    "Gel Pen",
    "Notebook",
    "Widget Pro 2000",
    "Basic Widget",
    "Stapler",
    "Paper Clips",
    "Highlighter",
    "Sticky Notes",
    "Envelope",
];

const VARIANTS: &[&str] = &["", "Small", "Medium", "Large", "Value Pack"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./shelf_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            other => {
                eprintln!("unknown argument: {other}");
                eprintln!("usage: seed [--count N] [--db PATH]");
                std::process::exit(2);
            }
        }
        i += 1;
    }

    info!(count, db = %db_path, "seeding products");

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let store = ProductStore::new(db.products());

    for n in 0..count {
        let base = NAMES[n % NAMES.len()];
        let variant = VARIANTS[(n / NAMES.len()) % VARIANTS.len()];
        let name = if variant.is_empty() {
            base.to_string()
        } else {
            format!("{base} {variant}")
        };

        // Deterministic but varied prices and stock, no RNG needed.
        let price = Money::from_cents(99 + (n as i64 * 37) % 1900);
        let stock = (n as i64 * 7) % 100;

        let draft = ProductDraft::new(name, price, stock)
            .description(format!("Demo product #{}", n + 1));
        store.create(draft).await?;
    }

    let total = db.products().count().await?;
    info!(total, "seed complete");

    db.close().await;
    Ok(())
}
