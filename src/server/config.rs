// src/server/config.rs
//! Configuration file parsing for the Pantry server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address
//! - [storage] - Database location
//! - [listing] - Ingredient list page size
//! - [session] - Flash message session cookie

use crate::server::ServerConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct PantryConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub storage: StorageSection,

    #[serde(default)]
    pub listing: ListingSection,

    #[serde(default)]
    pub session: SessionSection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Address to listen on
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

/// Storage configuration section
#[derive(Debug, Deserialize)]
pub struct StorageSection {
    /// SQLite database file
    #[serde(default = "default_database")]
    pub database: PathBuf,
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            database: default_database(),
        }
    }
}

fn default_database() -> PathBuf {
    PathBuf::from("pantry.db")
}

/// Listing configuration section
#[derive(Debug, Deserialize)]
pub struct ListingSection {
    /// Ingredients per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for ListingSection {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    crate::pagination::DEFAULT_PAGE_SIZE
}

/// Session configuration section
#[derive(Debug, Deserialize)]
pub struct SessionSection {
    /// Name of the cookie carrying the session id
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
        }
    }
}

fn default_cookie_name() -> String {
    "pantry_session".to_string()
}

impl PantryConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PantryConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        if self.listing.page_size == 0 {
            anyhow::bail!("listing.page_size must be at least 1");
        }

        let cookie = &self.session.cookie_name;
        if cookie.is_empty()
            || !cookie
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            anyhow::bail!(
                "session.cookie_name must be non-empty and use only letters, digits, '_' or '-', got '{}'",
                cookie
            );
        }

        Ok(())
    }

    /// Convert to the internal ServerConfig structure
    pub fn to_server_config(&self) -> Result<ServerConfig> {
        let bind_addr = self
            .server
            .bind
            .parse()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        Ok(ServerConfig {
            bind_addr,
            db_path: self.storage.database.clone(),
            page_size: self.listing.page_size,
            session_cookie: self.session.cookie_name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PantryConfig::default();
        assert!(config.validate().is_ok());

        let server = config.to_server_config().unwrap();
        assert_eq!(server.bind_addr, "127.0.0.1:8000".parse().unwrap());
        assert_eq!(server.page_size, 10);
        assert_eq!(server.session_cookie, "pantry_session");
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[server]
bind = "0.0.0.0:9000"

[storage]
database = "/srv/pantry/pantry.db"

[listing]
page_size = 25
"#;

        let config: PantryConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());

        let server = config.to_server_config().unwrap();
        assert_eq!(server.bind_addr.port(), 9000);
        assert_eq!(server.db_path, PathBuf::from("/srv/pantry/pantry.db"));
        assert_eq!(server.page_size, 25);
        assert_eq!(server.session_cookie, "pantry_session");
    }

    #[test]
    fn test_invalid_bind_address() {
        let config: PantryConfig = toml::from_str("[server]\nbind = \"nowhere\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let config: PantryConfig = toml::from_str("[listing]\npage_size = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_cookie_name_rejected() {
        let config: PantryConfig = toml::from_str("[session]\ncookie_name = \"a b;\"").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pantry.toml");
        std::fs::write(&path, "[listing]\npage_size = 5\n").unwrap();

        let config = PantryConfig::load(&path).unwrap();
        assert_eq!(config.listing.page_size, 5);

        assert!(PantryConfig::load(&dir.path().join("missing.toml")).is_err());
    }
}
