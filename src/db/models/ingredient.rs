// src/db/models/ingredient.rs

//! Ingredient model - the single catalogue entity

use crate::error::{Error, Result};
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// An ingredient row
///
/// `name` and `price` are optional because a freshly built ingredient is
/// empty until a form is bound to it. Rows read back from the database always
/// carry both.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    id: Option<i64>,
    pub name: Option<String>,
    pub price: Option<f64>,
    created_at: DateTime<Utc>,
}

impl Ingredient {
    /// Create an empty ingredient stamped with the current time
    pub fn new() -> Self {
        Self {
            id: None,
            name: None,
            price: None,
            // Stored with microsecond precision, so keep the in-memory value identical
            created_at: Utc::now().trunc_subsecs(6),
        }
    }

    /// Create an ingredient with both editable fields filled in
    pub fn with_values(name: impl Into<String>, price: f64) -> Self {
        let mut ingredient = Self::new();
        ingredient.name = Some(name.into());
        ingredient.price = Some(price);
        ingredient
    }

    /// Identifier assigned on first insert
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_created_at(&mut self, created_at: DateTime<Utc>) {
        self.created_at = created_at;
    }

    /// Insert this ingredient into the database
    pub fn insert(&mut self, conn: &Connection) -> Result<i64> {
        conn.execute(
            "INSERT INTO ingredients (name, price, created_at) VALUES (?1, ?2, ?3)",
            params![&self.name, &self.price, format_timestamp(&self.created_at)],
        )?;

        let id = conn.last_insert_rowid();
        self.id = Some(id);
        Ok(id)
    }

    /// Write `name` and `price` back to the row with this ingredient's id
    ///
    /// Returns false when no row matched. `created_at` is never rewritten.
    pub fn update(&self, conn: &Connection) -> Result<bool> {
        let id = self.id.ok_or_else(|| {
            Error::InitError("Cannot update ingredient without ID".to_string())
        })?;

        let changed = conn.execute(
            "UPDATE ingredients SET name = ?1, price = ?2 WHERE id = ?3",
            params![&self.name, &self.price, id],
        )?;

        Ok(changed > 0)
    }

    /// Find an ingredient by ID
    pub fn find_by_id(conn: &Connection, id: i64) -> Result<Option<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, price, created_at FROM ingredients WHERE id = ?1",
        )?;

        let ingredient = stmt.query_row([id], Self::from_row).optional()?;
        Ok(ingredient)
    }

    /// List all ingredients in insertion order
    pub fn list_all(conn: &Connection) -> Result<Vec<Self>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, price, created_at FROM ingredients ORDER BY id",
        )?;

        let ingredients = stmt
            .query_map([], Self::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(ingredients)
    }

    /// Count stored ingredients
    pub fn count(conn: &Connection) -> Result<i64> {
        let count = conn.query_row("SELECT COUNT(*) FROM ingredients", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Delete an ingredient by ID, returning whether a row was removed
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let removed = conn.execute("DELETE FROM ingredients WHERE id = ?1", [id])?;
        Ok(removed > 0)
    }

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        let created_str: String = row.get(3)?;
        let created_at = parse_timestamp(&created_str).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    e.to_string(),
                )),
            )
        })?;

        Ok(Self {
            id: Some(row.get(0)?),
            name: row.get(1)?,
            price: row.get(2)?,
            created_at,
        })
    }
}

impl Default for Ingredient {
    fn default() -> Self {
        Self::new()
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::ParseError(format!("Invalid timestamp '{s}': {e}")))
}
