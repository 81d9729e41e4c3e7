// src/db/models/mod.rs

//! Data models for Pantry database entities
//!
//! Rust structs that correspond to database tables, with methods for
//! creating, reading, updating, and deleting records.

mod ingredient;

pub use ingredient::Ingredient;
