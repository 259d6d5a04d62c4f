//! # Domain Types
//!
//! Record types for the `products` table.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐           ┌─────────────────┐                     │
//! │  │    Product      │           │  ProductFields  │                     │
//! │  │  ─────────────  │           │  ─────────────  │                     │
//! │  │  id (i64)       │           │  name           │                     │
//! │  │  name           │  ◄─ add ─ │  description    │                     │
//! │  │  description    │           │  cost           │                     │
//! │  │  cost (f64)     │           │  qty (def. 0)   │                     │
//! │  │  qty (i64)      │           └─────────────────┘                     │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Product` is a stored row and always carries its identifier.
//! `ProductFields` is what callers write: identifiers are assigned by the
//! database and never change.

use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// One row of the `products` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Auto-assigned row identifier.
    pub id: i64,

    /// Display name. Listings are ordered by this field.
    pub name: String,

    pub description: String,

    /// Unit cost.
    pub cost: f64,

    /// Units in stock.
    pub qty: i64,
}

// =============================================================================
// Product Fields
// =============================================================================

/// The caller-supplied columns of a product, used for inserts and full
/// updates.
///
/// When deserialized, `qty` falls back to `0` like the column default;
/// the other three fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub cost: f64,
    #[serde(default)]
    pub qty: i64,
}

impl ProductFields {
    /// Creates a field set.
    pub fn new(name: impl Into<String>, description: impl Into<String>, cost: f64, qty: i64) -> Self {
        ProductFields {
            name: name.into(),
            description: description.into(),
            cost,
            qty,
        }
    }

    /// Attaches an identifier, producing the record as it would be stored.
    pub fn with_id(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            cost: self.cost,
            qty: self.qty,
        }
    }
}

// =============================================================================
// Ordering
// =============================================================================

/// Sorts products by name, ascending.
///
/// Comparison is byte-wise on the UTF-8 name and the sort is stable, so
/// products sharing a name keep their relative order.
pub fn sort_by_name(products: &mut [Product]) {
    products.sort_by(|a, b| a.name.cmp(&b.name));
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, name: &str) -> Product {
        ProductFields::new(name, "", 1.0, 1).with_id(id)
    }

    #[test]
    fn test_sort_by_name() {
        let mut products = vec![
            product(1, "Wireless Mouse"),
            product(2, "Backpack"),
            product(3, "LED Desk Lamp"),
            product(4, "Laptop Stand"),
        ];

        sort_by_name(&mut products);

        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Backpack", "LED Desk Lamp", "Laptop Stand", "Wireless Mouse"]
        );
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let mut products = vec![product(7, "Pen"), product(3, "Pen"), product(5, "Cup")];

        sort_by_name(&mut products);

        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 7, 3]);
    }

    #[test]
    fn test_fields_round_trip_through_with_id() {
        let fields = ProductFields::new("Pen", "Blue ink pen", 20.0, 100);
        let stored = fields.clone().with_id(42);

        assert_eq!(stored.id, 42);
        assert_eq!(stored.name, fields.name);
        assert_eq!(stored.description, fields.description);
        assert_eq!(stored.cost, fields.cost);
        assert_eq!(stored.qty, fields.qty);
    }

    #[test]
    fn test_missing_qty_defaults_to_zero() {
        let fields: ProductFields = serde_json::from_str(
            r#"{"name": "Notebook", "description": "Ruled", "cost": 50.0}"#,
        )
        .unwrap();

        assert_eq!(fields.qty, 0);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let result: Result<ProductFields, _> =
            serde_json::from_str(r#"{"description": "No name", "cost": 1.0, "qty": 2}"#);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("name"));
    }
}
