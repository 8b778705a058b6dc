use std::str::FromStr;

use anyhow::{Context, Result, bail};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => bail!("Unknown STORAGE_BACKEND '{}', expected 'postgres' or 'memory'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub storage_backend: StorageBackend,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => StorageBackend::Postgres,
        };

        let database_url = lookup("DATABASE_URL");
        if storage_backend == StorageBackend::Postgres && database_url.is_none() {
            bail!("Cannot load DATABASE_URL env variable");
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: match lookup("PORT") {
                Some(port) => port.parse().context("PORT must be a number")?,
                None => DEFAULT_PORT,
            },
            storage_backend,
            database_url,
            database_max_connections: match lookup("DATABASE_MAX_CONNECTIONS") {
                Some(max) => max
                    .parse()
                    .context("DATABASE_MAX_CONNECTIONS must be a number")?,
                None => storage::database::DEFAULT_MAX_CONNECTIONS,
            },
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Strips credentials from a connection URL for logging.
pub fn redact_database_url(url: &str) -> &str {
    url.split('@').next_back().unwrap_or("unknown")
}
