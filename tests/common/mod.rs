// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use pantry::db;
use pantry::db::models::Ingredient;
use pantry::form::Payload;
use tempfile::TempDir;

/// Create an empty, migrated test database.
///
/// Returns (TempDir, db_path) - keep the TempDir alive to prevent cleanup.
pub fn setup_empty_db() -> (TempDir, String) {
    let temp_dir = tempfile::tempdir().unwrap();
    let db_path = temp_dir
        .path()
        .join("test.db")
        .to_str()
        .unwrap()
        .to_string();

    db::init(&db_path).unwrap();
    (temp_dir, db_path)
}

/// Create a test database holding `count` ingredients named "Ingrédient N".
pub fn setup_db_with_ingredients(count: usize) -> (TempDir, String) {
    let (temp_dir, db_path) = setup_empty_db();
    let mut conn = db::open(&db_path).unwrap();

    db::transaction(&mut conn, |tx| {
        for i in 1..=count {
            Ingredient::with_values(format!("Ingrédient {i}"), i as f64).insert(tx)?;
        }
        Ok(())
    })
    .unwrap();

    (temp_dir, db_path)
}

/// Build a form submission from name/price text.
pub fn payload(name: &str, price: &str) -> Payload {
    Payload::from([
        ("name".to_string(), name.to_string()),
        ("price".to_string(), price.to_string()),
    ])
}
