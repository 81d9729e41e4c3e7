// src/lib.rs

//! Pantry ingredient catalogue
//!
//! Create, edit, list and delete ingredients with a name and a price.
//!
//! # Architecture
//!
//! - Database-first: ingredients live in SQLite behind the `IngredientStore` seam
//! - Forms: submitted values are bound onto the entity, then validated per field
//! - Workflow: each page operation resolves to either a form to show or a
//!   redirect to the list carrying a one-shot notification
//! - Server (feature `server`): axum routes over the workflow with cookie-keyed
//!   flash messages

pub mod db;
mod error;
pub mod form;
pub mod notification;
pub mod pagination;
pub mod seed;
pub mod store;
pub mod workflow;

#[cfg(feature = "server")]
pub mod server;

pub use db::models::Ingredient;
pub use error::{Error, Result};
pub use form::{IngredientForm, Payload, Rule, Violation};
pub use notification::{Category, Notification};
pub use pagination::{Page, paginate};
pub use store::{IngredientStore, MemoryStore, SqliteStore};
pub use workflow::{FormState, IngredientWorkflow, Outcome};
