// src/config.rs

//! Application configuration structures.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Article storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// CSV export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(AppError::config(format!(
                "server.bind is not a valid socket address: {}",
                self.server.bind
            )));
        }
        if self.storage.dir.trim().is_empty() {
            return Err(AppError::config("storage.dir is empty"));
        }
        if self.export.output.trim().is_empty() {
            return Err(AppError::config("export.output is empty"));
        }
        Ok(())
    }

    /// Parse the configured bind address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().map_err(|_| {
            AppError::config(format!("Invalid bind address: {}", self.server.bind))
        })
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address and port to listen on
    #[serde(default = "defaults::bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: defaults::bind(),
        }
    }
}

/// Article storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one text file per stored article
    #[serde(default = "defaults::storage_dir")]
    pub dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: defaults::storage_dir(),
        }
    }
}

/// CSV export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default output path for `articled export`
    #[serde(default = "defaults::export_output")]
    pub output: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: defaults::export_output(),
        }
    }
}

mod defaults {
    pub fn bind() -> String {
        "127.0.0.1:8080".into()
    }
    pub fn storage_dir() -> String {
        "articles_data".into()
    }
    pub fn export_output() -> String {
        "articles_export.csv".into()
    }
}
