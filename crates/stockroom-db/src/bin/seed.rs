//! # Seed Database Tool
//!
//! Creates (or opens) a catalog database and prints its contents.
//!
//! ## Usage
//! ```bash
//! # Create ./stockroom.db with the sample catalog and print it
//! cargo run -p stockroom-db --bin seed
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//!
//! # Print as JSON
//! cargo run -p stockroom-db --bin seed -- --json
//! ```
//!
//! `STOCKROOM_DB_PATH` overrides the default path; `--db` overrides both.
//! Seeding only happens when the file doesn't exist yet.

use std::env;

use stockroom_db::{ProductStore, StoreConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_DB_PATH: &str = "./stockroom.db";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut db_path = env::var("STOCKROOM_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--json" | "-j" => json = true,
            "--help" | "-h" => {
                println!("Stockroom Seed Tool");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: {})", DEFAULT_DB_PATH);
                println!("  -j, --json         Print the catalog as JSON");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    let config = StoreConfig::new(&db_path);
    let fresh = !config.database_exists();
    let store = ProductStore::initialize(config).await?;

    info!(path = %store.path().display(), fresh, "Store ready");

    let products = store.list().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    println!("{:>4}  {:<22} {:>10} {:>5}", "ID", "NAME", "COST", "QTY");
    for product in &products {
        println!(
            "{:>4}  {:<22} {:>10.2} {:>5}",
            product.id, product.name, product.cost, product.qty
        );
    }
    println!();
    println!("{} products in {}", products.len(), store.path().display());

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: info, with debug for the stockroom crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockroom_db=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
