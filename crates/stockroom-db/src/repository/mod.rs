//! # Repository Module
//!
//! Database access for the product catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Caller                                                                │
//! │       │  store.update_qty(7, 5)                                        │
//! │       ▼                                                                 │
//! │  ProductStore                                                          │
//! │  ├── list / get / count                                                │
//! │  ├── add                                                               │
//! │  └── update / update_qty / delete  ──► RowOutcome                      │
//! │       │                                                                 │
//! │       │  one connection per call                                        │
//! │       ▼                                                                 │
//! │  SQLite file                                                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductStore`](product::ProductStore) - Product CRUD and bootstrap

pub mod product;

use crate::error::{DbError, DbResult};

/// What a keyed mutation did.
///
/// Mutations on an id that doesn't exist are not errors; they touch no
/// rows and report [`RowOutcome::NotFound`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// At least one row matched the id.
    Applied,
    /// No row has the id. Nothing was written.
    NotFound,
}

impl RowOutcome {
    pub(crate) fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            RowOutcome::NotFound
        } else {
            RowOutcome::Applied
        }
    }

    /// True when a row matched.
    pub fn is_applied(self) -> bool {
        self == RowOutcome::Applied
    }

    /// Converts `NotFound` into [`DbError::NotFound`] for callers that treat
    /// a missing id as a failure.
    pub fn require(self, entity: &str, id: i64) -> DbResult<()> {
        match self {
            RowOutcome::Applied => Ok(()),
            RowOutcome::NotFound => Err(DbError::not_found(entity, id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_affected() {
        assert_eq!(RowOutcome::from_rows_affected(0), RowOutcome::NotFound);
        assert_eq!(RowOutcome::from_rows_affected(1), RowOutcome::Applied);
    }

    #[test]
    fn test_require() {
        assert!(RowOutcome::Applied.require("Product", 1).is_ok());

        let err = RowOutcome::NotFound.require("Product", 404).unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(err.to_string(), "Product not found: 404");
    }
}
