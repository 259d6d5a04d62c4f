//! # Seed Catalog
//!
//! The fixed set of sample products written once, when a database file is
//! created for the first time.

use crate::types::ProductFields;

/// Sample products as `(name, description, cost, qty)`.
pub const SEED_PRODUCTS: &[(&str, &str, f64, i64)] = &[
    ("Backpack", "A durable and stylish backpack for daily use.", 800.0, 10),
    ("Wireless Mouse", "A sleek and ergonomic wireless mouse with a long battery life.", 800.0, 20),
    ("Bluetooth Speaker", "A portable Bluetooth speaker with high-quality sound and deep bass.", 3000.0, 30),
    ("Laptop Stand", "An adjustable laptop stand for better posture and cooling.", 250.0, 15),
    ("Notebook", "A premium notebook with thick, high-quality paper.", 50.0, 50),
    ("Smartphone Case", "A durable and stylish case for protecting your smartphone.", 150.0, 25),
    ("Power Bank", "A high-capacity power bank with fast charging support.", 900.0, 20),
    ("Headphones", "Over-ear headphones with noise cancellation and deep bass.", 5000.0, 10),
    ("Gaming Keyboard", "A mechanical gaming keyboard with RGB lighting.", 3000.0, 10),
    ("USB-C Hub", "A multi-port USB-C hub for all your connectivity needs.", 400.0, 25),
    ("Fitness Tracker", "A sleek fitness tracker with heart rate monitoring.", 1000.0, 20),
    ("Travel Mug", "An insulated travel mug that keeps your drinks hot or cold.", 500.0, 30),
    ("Desk Organizer", "A compact desk organizer for keeping your workspace tidy.", 1200.0, 40),
    ("External Hard Drive", "A portable external hard drive with 1TB of storage.", 800.0, 15),
    ("Wireless Charger", "A fast wireless charger compatible with most devices.", 2500.0, 30),
    ("Digital Camera", "A compact digital camera with 4K video recording.", 20000.0, 5),
    ("Electric Kettle", "A fast-boiling electric kettle with auto shut-off.", 3000.0, 20),
    ("Smart Watch", "A stylish smartwatch with fitness and notification features.", 12000.0, 10),
    ("LED Desk Lamp", "A modern LED desk lamp with adjustable brightness.", 2000.0, 35),
    ("Portable Projector", "A mini portable projector with HD resolution.", 15000.0, 8),
];

/// Returns the seed catalog as insertable field sets, in declaration order.
pub fn seed_products() -> Vec<ProductFields> {
    SEED_PRODUCTS
        .iter()
        .map(|&(name, description, cost, qty)| ProductFields::new(name, description, cost, qty))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_catalog_has_twenty_products() {
        assert_eq!(SEED_PRODUCTS.len(), 20);
        assert_eq!(seed_products().len(), 20);
    }

    #[test]
    fn test_seed_names_are_unique_and_values_sane() {
        let names: HashSet<&str> = SEED_PRODUCTS.iter().map(|p| p.0).collect();
        assert_eq!(names.len(), SEED_PRODUCTS.len());

        for fields in seed_products() {
            assert!(!fields.name.is_empty());
            assert!(fields.cost >= 0.0);
            assert!(fields.qty >= 0);
        }
    }
}
