//! # Schema Bootstrap
//!
//! Creates the `products` table and writes the seed catalog.
//!
//! ## When Bootstrap Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ProductStore::initialize                           │
//! │                                                                         │
//! │  database file exists?                                                 │
//! │       │                                                                 │
//! │       ├── yes ──► skip (no schema check, no seeding)                   │
//! │       │                                                                 │
//! │       ▼ no                                                              │
//! │  BEGIN IMMEDIATE              ← takes the write lock up front          │
//! │    products table present? ──► yes: another initializer won, skip      │
//! │    CREATE TABLE IF NOT EXISTS products (...)                           │
//! │    INSERT × 20 seed products                                           │
//! │  COMMIT                                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Two initializers racing on a missing file both reach bootstrap. The
//! write lock serializes them and the table check inside it keeps the seed
//! rows from being written twice.
//!
//! Outside that race the decision is made on file existence alone. A file that exists but
//! lacks the table is left as it is, and operations against it fail with
//! [`DbError::QueryFailed`](crate::DbError::QueryFailed).

use sqlx::SqliteConnection;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use stockroom_core::seed::seed_products;

const PRODUCTS_TABLE: &str = "products";

const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        cost REAL NOT NULL,
        qty INTEGER DEFAULT 0
    )
"#;

/// Creates the schema and inserts the seed catalog in one write transaction.
///
/// Does nothing if the `products` table already exists once the write lock
/// is held. Returns the number of seed rows written.
pub async fn bootstrap(conn: &mut SqliteConnection) -> DbResult<usize> {
    info!("Bootstrapping product schema");

    sqlx::query("BEGIN IMMEDIATE")
        .execute(&mut *conn)
        .await
        .map_err(schema_error)?;

    let result = seed_if_missing(conn).await;
    let end = if result.is_ok() { "COMMIT" } else { "ROLLBACK" };
    let finished = sqlx::query(end).execute(&mut *conn).await;

    let seeded = result?;
    finished.map_err(schema_error)?;

    info!(seeded, "Product schema ready");
    Ok(seeded)
}

async fn seed_if_missing(conn: &mut SqliteConnection) -> DbResult<usize> {
    if table_exists(conn, PRODUCTS_TABLE).await? {
        debug!("products table already created by another initializer");
        return Ok(0);
    }

    create_tables(conn).await?;
    insert_seed_data(conn).await
}

/// Creates the `products` table if it is missing.
pub async fn create_tables(conn: &mut SqliteConnection) -> DbResult<()> {
    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(&mut *conn)
        .await
        .map_err(schema_error)?;

    debug!("products table created");
    Ok(())
}

/// Inserts the seed catalog. Returns the number of rows written.
pub async fn insert_seed_data(conn: &mut SqliteConnection) -> DbResult<usize> {
    let products = seed_products();

    for product in &products {
        sqlx::query("INSERT INTO products (name, description, cost, qty) VALUES (?1, ?2, ?3, ?4)")
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.cost)
            .bind(product.qty)
            .execute(&mut *conn)
            .await
            .map_err(schema_error)?;
    }

    Ok(products.len())
}

/// Checks whether a table with the given name exists.
pub async fn table_exists(conn: &mut SqliteConnection, table: &str) -> DbResult<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1")
            .bind(table)
            .fetch_one(&mut *conn)
            .await?;

    Ok(count > 0)
}

fn schema_error(err: sqlx::Error) -> DbError {
    DbError::SchemaFailed(err.to_string())
}
