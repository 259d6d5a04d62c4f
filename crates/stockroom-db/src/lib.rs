//! # stockroom-db: Database Layer for Stockroom
//!
//! Persistence for the product catalog, backed by a single SQLite file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Caller (seed binary, application code)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  Connection   │    │  Repository   │    │    Schema    │  │   │
//! │  │   │(connection.rs)│    │ (product.rs)  │    │ (schema.rs)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ open/release  │◄───│ ProductStore  │───►│ DDL + seeds  │  │   │
//! │  │   │ per operation │    │ RowOutcome    │    │ (first use)  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    SQLite (single file)                         │   │
//! │  │  products(id, name, description, cost, qty)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Database path and per-connection settings
//! - [`connection`] - Scoped, per-operation connections
//! - [`schema`] - Table creation and seed data
//! - [`error`] - Database error types
//! - [`repository`] - `ProductStore` and `RowOutcome`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{ProductStore, StoreConfig};
//!
//! let store = ProductStore::initialize(StoreConfig::new("path/to/stockroom.db")).await?;
//!
//! for product in store.list().await? {
//!     println!("{} x{}", product.name, product.qty);
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod connection;
pub mod error;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{DbError, DbResult};
pub use repository::product::ProductStore;
pub use repository::RowOutcome;

pub use stockroom_core::{Product, ProductFields};
