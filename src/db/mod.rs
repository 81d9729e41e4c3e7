// src/db/mod.rs

//! SQLite persistence for Pantry
//!
//! All durable state lives in a single SQLite file. Connections are cheap
//! and opened on demand; the server opens one per request.

pub mod models;
pub mod schema;

use crate::error::{Error, Result};
use rusqlite::{Connection, Transaction};
use std::path::Path;
use tracing::{debug, info};

/// Create the database file (and its parent directory) and apply migrations
pub fn init(db_path: &str) -> Result<()> {
    let path = Path::new(db_path);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::InitError(format!(
                    "Failed to create database directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    info!("Initializing database at {}", db_path);
    let conn = Connection::open(path)?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(())
}

/// Open an existing database
///
/// Pending migrations are applied so an older file keeps working after an
/// upgrade.
pub fn open(db_path: &str) -> Result<Connection> {
    if !Path::new(db_path).exists() {
        return Err(Error::InitError(format!(
            "Database not found at {db_path}. Run 'pantry init' first."
        )));
    }

    debug!("Opening database {}", db_path);
    let conn = Connection::open(db_path)?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(conn)
}

/// Run `f` inside a transaction, committing on success and rolling back on error
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    let value = f(&tx)?;
    tx.commit()?;
    Ok(value)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         PRAGMA busy_timeout = 5000;",
    )?;
    Ok(())
}
