//! Configuration file for todoapi
//!
//! Read from `~/.todoapi/config.toml` unless `--config` names another file.
//! Every value is optional; CLI flags and environment variables win.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use todoapi_server::ConnectionOptions;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TodoApiConfig {
    pub database: DatabaseConfig,
    pub server: ServerSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub connection_string: Option<String>,
    pub max_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
}

impl TodoApiConfig {
    /// Load config from an explicit path, or from the default location.
    ///
    /// A missing default file yields the empty config; a missing explicit
    /// file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .context(format!("Failed to read config file: {:?}", path))?;
        Self::from_toml_str(&content)
            .context(format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid TOML")
    }

    /// Get config file path: ~/.todoapi/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".todoapi/config.toml")
    }

    /// Pool tunables, falling back to the client defaults.
    pub fn connection_options(&self) -> ConnectionOptions {
        let defaults = ConnectionOptions::default();
        ConnectionOptions {
            max_connections: self
                .database
                .max_connections
                .unwrap_or(defaults.max_connections),
            acquire_timeout: self
                .database
                .acquire_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.acquire_timeout),
        }
    }

    /// Pick the connection string: flag/env value first, then the file.
    pub fn resolve_database_url(&self, from_args: Option<String>) -> Result<String> {
        from_args
            .or_else(|| self.database.connection_string.clone())
            .filter(|url| !url.trim().is_empty())
            .context(
                "DATABASE_URL not set. Set via --database-url, DATABASE_URL env, .env, \
                 or [database] connection_string in ~/.todoapi/config.toml",
            )
    }
}
