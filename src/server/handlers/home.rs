// src/server/handlers/home.rs
//! Landing page

use crate::server::routes::{INGREDIENT_LIST, INGREDIENT_NEW};
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub title: &'static str,
    pub links: Vec<Link>,
}

#[derive(Debug, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// GET /
pub async fn index() -> Json<HomeView> {
    Json(HomeView {
        title: "Accueil",
        links: vec![
            Link {
                label: "Ingrédients",
                href: INGREDIENT_LIST,
            },
            Link {
                label: "Nouvel ingrédient",
                href: INGREDIENT_NEW,
            },
        ],
    })
}
