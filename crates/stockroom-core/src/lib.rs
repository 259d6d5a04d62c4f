//! # stockroom-core: Pure Catalog Types
//!
//! Record types for the product catalog plus the fixed seed catalog.
//! Nothing in this crate touches the database or the file system.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ stockroom-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐          ┌───────────────┐                 │   │
//! │  │   │     types     │          │     seed      │                 │   │
//! │  │   │   Product     │          │ SEED_PRODUCTS │                 │   │
//! │  │   │ ProductFields │          │  (20 rows)    │                 │   │
//! │  │   └───────────────┘          └───────────────┘                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-db (Database Layer)                   │   │
//! │  │            ProductStore, schema bootstrap, connections          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::ProductFields;
//!
//! let pen = ProductFields::new("Pen", "Blue ink pen", 20.0, 100);
//! assert_eq!(pen.qty, 100);
//!
//! let seeds = stockroom_core::seed::seed_products();
//! assert_eq!(seeds.len(), 20);
//! ```

pub mod seed;
pub mod types;

pub use types::*;
