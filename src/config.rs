use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

use crate::connection::StoreConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db?mode=rwc";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MIN_CONNECTIONS: u32 = 0;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Process-level settings, resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ServiceConfig {
    /// Load from process environment, reading `.env` first when present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("APP_HOST").unwrap_or(defaults.host);

        let port = match lookup("APP_PORT") {
            Some(raw) => raw.parse::<u16>().context("APP_PORT must be a valid u16")?,
            None => defaults.port,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a valid u32")?,
            None => defaults.max_connections,
        };

        let min_connections = match lookup("DB_MIN_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .context("DB_MIN_CONNECTIONS must be a valid u32")?,
            None => defaults.min_connections,
        };

        let connect_timeout_secs = match lookup("DB_CONNECT_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("DB_CONNECT_TIMEOUT_SECS must be a valid u64")?,
            None => defaults.connect_timeout_secs,
        };

        Ok(Self {
            host,
            port,
            database_url,
            max_connections,
            min_connections,
            connect_timeout_secs,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Storage settings derived from this config.
    pub fn store_config(&self) -> StoreConfig {
        let timeout = Duration::from_secs(self.connect_timeout_secs);
        let config = StoreConfig::new(&self.database_url);
        if config.is_in_memory() {
            // The database lives only as long as its single connection.
            StoreConfig {
                url: self.database_url.clone(),
                ..StoreConfig::in_memory()
            }
            .connect_timeout(timeout)
        } else {
            config
                .max_connections(self.max_connections)
                .min_connections(self.min_connections)
                .connect_timeout(timeout)
        }
    }
}
