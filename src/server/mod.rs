// src/server/mod.rs
//! Pantry HTTP server
//!
//! Serves the ingredient pages:
//! - Paginated list with one-shot notifications
//! - Create and edit forms with per-field validation errors
//! - Delete with redirect back to the list
//!
//! Views are JSON view-models; presentation is left to the client.

pub mod config;
mod handlers;
mod routes;
pub mod session;

pub use config::PantryConfig;
pub use routes::create_router;
pub use session::{FlashStore, MemoryFlashStore};

use anyhow::Result;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_addr: SocketAddr,
    /// Path to the Pantry database
    pub db_path: PathBuf,
    /// Ingredients per list page
    pub page_size: usize,
    /// Cookie carrying the flash session id
    pub session_cookie: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            db_path: PathBuf::from("pantry.db"),
            page_size: crate::pagination::DEFAULT_PAGE_SIZE,
            session_cookie: "pantry_session".to_string(),
        }
    }
}

/// Shared server state
pub struct ServerState {
    pub config: ServerConfig,
    pub flashes: Arc<dyn FlashStore>,
}

/// Shared state handle passed to handlers
pub type SharedState = Arc<ServerState>;

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self::with_flash_store(config, Arc::new(MemoryFlashStore::new()))
    }

    pub fn with_flash_store(config: ServerConfig, flashes: Arc<dyn FlashStore>) -> Self {
        Self { config, flashes }
    }

    /// Open a database connection
    ///
    /// Call from within `spawn_blocking`.
    pub fn open_db(&self) -> crate::Result<rusqlite::Connection> {
        crate::db::open(&self.config.db_path.to_string_lossy())
    }
}

/// Start the Pantry server
pub async fn run_server(config: ServerConfig) -> Result<()> {
    tracing::info!("Starting Pantry server on {}", config.bind_addr);
    tracing::info!("Database: {:?}", config.db_path);
    tracing::info!("Page size: {}", config.page_size);

    // Create and migrate up front so the first request does not pay for it
    crate::db::init(&config.db_path.to_string_lossy())?;

    let bind_addr = config.bind_addr;
    let state = Arc::new(ServerState::new(config));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Pantry is ready to serve");

    axum::serve(listener, app).await?;
    Ok(())
}
