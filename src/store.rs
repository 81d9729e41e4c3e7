// src/store.rs

//! Ingredient repository
//!
//! The workflow talks to storage only through [`IngredientStore`]. The store
//! does no validation: whatever it is handed gets written.

use crate::db::models::Ingredient;
use crate::error::{Error, Result};
use rusqlite::Connection;
use tracing::debug;

/// Durable storage for ingredients
pub trait IngredientStore {
    /// Every stored ingredient, in insertion order
    fn find_all(&self) -> Result<Vec<Ingredient>>;

    /// The ingredient with this id, or `None`
    fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>>;

    /// Insert when the ingredient has no id (assigning one), update otherwise
    ///
    /// Updating an id that no longer exists yields `Error::NotFoundError`.
    fn save(&mut self, ingredient: &mut Ingredient) -> Result<()>;

    /// Remove the stored row; returns false if it was already gone
    fn delete(&mut self, ingredient: &Ingredient) -> Result<bool>;
}

/// SQLite-backed store borrowing an open connection
pub struct SqliteStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl IngredientStore for SqliteStore<'_> {
    fn find_all(&self) -> Result<Vec<Ingredient>> {
        Ingredient::list_all(self.conn)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>> {
        Ingredient::find_by_id(self.conn, id)
    }

    fn save(&mut self, ingredient: &mut Ingredient) -> Result<()> {
        match ingredient.id() {
            None => {
                let id = ingredient.insert(self.conn)?;
                debug!("Inserted ingredient {}", id);
            }
            Some(id) => {
                if !ingredient.update(self.conn)? {
                    return Err(Error::NotFoundError(format!("ingredient {id}")));
                }
                debug!("Updated ingredient {}", id);
            }
        }
        Ok(())
    }

    fn delete(&mut self, ingredient: &Ingredient) -> Result<bool> {
        match ingredient.id() {
            Some(id) => Ingredient::delete(self.conn, id),
            None => Ok(false),
        }
    }
}

/// In-process store used for tests and dry runs
///
/// Ids come from a counter that only grows, matching the SQLite table.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Vec<Ingredient>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl IngredientStore for MemoryStore {
    fn find_all(&self) -> Result<Vec<Ingredient>> {
        Ok(self.rows.clone())
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Ingredient>> {
        Ok(self.rows.iter().find(|row| row.id() == Some(id)).cloned())
    }

    fn save(&mut self, ingredient: &mut Ingredient) -> Result<()> {
        match ingredient.id() {
            None => {
                self.last_id += 1;
                ingredient.assign_id(self.last_id);
                self.rows.push(ingredient.clone());
            }
            Some(id) => {
                let row = self
                    .rows
                    .iter_mut()
                    .find(|row| row.id() == Some(id))
                    .ok_or_else(|| Error::NotFoundError(format!("ingredient {id}")))?;
                row.name = ingredient.name.clone();
                row.price = ingredient.price;
            }
        }
        Ok(())
    }

    fn delete(&mut self, ingredient: &Ingredient) -> Result<bool> {
        let before = self.rows.len();
        if let Some(id) = ingredient.id() {
            self.rows.retain(|row| row.id() != Some(id));
        }
        Ok(self.rows.len() < before)
    }
}
