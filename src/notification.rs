// src/notification.rs

//! One-shot user notifications (flash messages)

use serde::{Deserialize, Serialize};

/// Notification category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Success,
    Error,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
        }
    }
}

/// A category-tagged message shown once after an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub category: Category,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: Category::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            category: Category::Error,
            message: message.into(),
        }
    }

    pub fn created() -> Self {
        Self::success("Votre ingrédient a été créé avec succès.")
    }

    pub fn updated() -> Self {
        Self::success("Votre ingrédient a été modifié avec succès.")
    }

    pub fn deleted() -> Self {
        Self::success("Votre ingrédient a été supprimé avec succès.")
    }

    pub fn not_found() -> Self {
        Self::error("L'ingrédient demandé est introuvable.")
    }
}
