// src/server/routes.rs
//! Axum router configuration for the Pantry server
//!
//! Every route is declared here; handlers know nothing about their paths.

use crate::server::SharedState;
use crate::server::handlers::{home, ingredients};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub const HOME: &str = "/";
pub const HEALTH: &str = "/health";
pub const INGREDIENT_LIST: &str = "/ingredient";
pub const INGREDIENT_NEW: &str = "/ingredient/nouveau";
pub const INGREDIENT_EDIT: &str = "/ingredient/modification/:id";
pub const INGREDIENT_DELETE: &str = "/ingredient/suppression/:id";

/// Concrete edit URL for an ingredient
pub fn edit_path(id: i64) -> String {
    INGREDIENT_EDIT.replace(":id", &id.to_string())
}

/// Concrete delete URL for an ingredient
pub fn delete_path(id: i64) -> String {
    INGREDIENT_DELETE.replace(":id", &id.to_string())
}

/// Create the main application router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route(HOME, get(home::index))
        .route(HEALTH, get(health_check))
        .route(INGREDIENT_LIST, get(ingredients::list))
        .route(
            INGREDIENT_NEW,
            get(ingredients::new_form).post(ingredients::new_submit),
        )
        .route(
            INGREDIENT_EDIT,
            get(ingredients::edit_form).post(ingredients::edit_submit),
        )
        .route(INGREDIENT_DELETE, get(ingredients::delete))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
