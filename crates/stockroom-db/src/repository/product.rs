//! # Product Store
//!
//! Schema bootstrap and CRUD for the `products` table.
//!
//! ## Key Operations
//! - First-use bootstrap (schema + 20 seed products)
//! - Name-ordered listing
//! - Insert, lookup, full update, quantity update, delete
//!
//! ## Per-Call Connections
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  store.get(7)          store.update_qty(7, 5)      store.list()        │
//! │       │                      │                          │              │
//! │       ▼                      ▼                          ▼              │
//! │   open conn              open conn                  open conn          │
//! │   SELECT ... id = 7      UPDATE ... qty = 5         SELECT ...         │
//! │   close                  (autocommit)               close              │
//! │                          close                      sort by name       │
//! │                                                                         │
//! │  Nothing is shared between calls. Concurrent callers are arbitrated    │
//! │  by SQLite's file lock (and the configured busy timeout) only.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use tracing::{debug, info};

use crate::config::StoreConfig;
use crate::connection::ScopedConnection;
use crate::error::DbResult;
use crate::repository::RowOutcome;
use crate::schema;
use stockroom_core::{sort_by_name, Product, ProductFields};

const SELECT_PRODUCTS: &str = "SELECT id, name, description, cost, qty FROM products";

/// Façade over the `products` table.
///
/// Holds only configuration. Every method opens a fresh connection, runs
/// its statement, and closes the connection before returning, including
/// when the statement fails.
///
/// ## Usage
/// ```rust,ignore
/// let store = ProductStore::open("./stockroom.db").await?;
///
/// let id = store.add(&ProductFields::new("Pen", "Blue ink pen", 20.0, 100)).await?;
/// let pen = store.get(id).await?;
///
/// store.update_qty(id, 5).await?.require("Product", id)?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductStore {
    config: StoreConfig,
}

impl ProductStore {
    /// Opens the store, bootstrapping the database on first use.
    ///
    /// ## What This Does
    /// - File missing: creates it, creates the `products` table and inserts
    ///   the seed catalog, all in one transaction
    /// - File present: nothing; the schema is assumed to be there
    pub async fn initialize(config: StoreConfig) -> DbResult<Self> {
        info!(path = %config.path().display(), "Initializing product store");

        if config.database_exists() {
            debug!("Database file present, skipping bootstrap");
        } else {
            let mut handle = ScopedConnection::open(&config).await?;
            let result = schema::bootstrap(handle.conn()).await;
            handle.release().await;
            result?;
        }

        Ok(ProductStore { config })
    }

    /// Shorthand for [`initialize`](Self::initialize) with default settings.
    pub async fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Self::initialize(StoreConfig::new(path.as_ref())).await
    }

    /// Returns the database file path.
    pub fn path(&self) -> &Path {
        self.config.path()
    }

    /// Lists every product, sorted by name ascending.
    ///
    /// Sorting happens after the rows are fetched, not in SQL.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let mut handle = self.acquire().await?;
        let result = sqlx::query_as::<_, Product>(SELECT_PRODUCTS)
            .fetch_all(handle.conn())
            .await;
        handle.release().await;

        let mut products = result?;
        sort_by_name(&mut products);

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Inserts a product and returns its newly assigned id.
    pub async fn add(&self, product: &ProductFields) -> DbResult<i64> {
        debug!(name = %product.name, "Inserting product");

        let mut handle = self.acquire().await?;
        let result = sqlx::query(
            "INSERT INTO products (name, description, cost, qty) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.cost)
        .bind(product.qty)
        .execute(handle.conn())
        .await;
        handle.release().await;

        let id = result?.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Gets a product by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No product with that id
    pub async fn get(&self, id: i64) -> DbResult<Option<Product>> {
        let mut handle = self.acquire().await?;
        let result = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, cost, qty FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(handle.conn())
        .await;
        handle.release().await;

        Ok(result?)
    }

    /// Sets the quantity of one product, leaving its other fields alone.
    pub async fn update_qty(&self, id: i64, qty: i64) -> DbResult<RowOutcome> {
        debug!(id, qty, "Updating quantity");

        let mut handle = self.acquire().await?;
        let result = sqlx::query("UPDATE products SET qty = ?1 WHERE id = ?2")
            .bind(qty)
            .bind(id)
            .execute(handle.conn())
            .await;
        handle.release().await;

        Ok(Self::outcome(id, result?.rows_affected()))
    }

    /// Overwrites name, description, cost and quantity of one product.
    pub async fn update(&self, id: i64, product: &ProductFields) -> DbResult<RowOutcome> {
        debug!(id, name = %product.name, "Updating product");

        let mut handle = self.acquire().await?;
        let result = sqlx::query(
            "UPDATE products SET name = ?1, description = ?2, cost = ?3, qty = ?4 WHERE id = ?5",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.cost)
        .bind(product.qty)
        .bind(id)
        .execute(handle.conn())
        .await;
        handle.release().await;

        Ok(Self::outcome(id, result?.rows_affected()))
    }

    /// Deletes one product.
    pub async fn delete(&self, id: i64) -> DbResult<RowOutcome> {
        debug!(id, "Deleting product");

        let mut handle = self.acquire().await?;
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(handle.conn())
            .await;
        handle.release().await;

        Ok(Self::outcome(id, result?.rows_affected()))
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let mut handle = self.acquire().await?;
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(handle.conn())
            .await;
        handle.release().await;

        Ok(result?)
    }

    /// Checks if the database is reachable (can open and execute queries).
    pub async fn health_check(&self) -> bool {
        let Ok(mut handle) = self.acquire().await else {
            return false;
        };
        let result = sqlx::query("SELECT 1").execute(handle.conn()).await;
        handle.release().await;

        result.is_ok()
    }

    async fn acquire(&self) -> DbResult<ScopedConnection> {
        ScopedConnection::open(&self.config).await
    }

    fn outcome(id: i64, rows_affected: u64) -> RowOutcome {
        let outcome = RowOutcome::from_rows_affected(rows_affected);
        debug!(id, rows_affected, ?outcome, "Mutation finished");
        outcome
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
