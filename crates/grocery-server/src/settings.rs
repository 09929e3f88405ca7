//! Server configuration
//!
//! Built-in defaults overridden by `GROCERY_*` environment variables, e.g.
//! `GROCERY_BIND_ADDRESS=0.0.0.0:8000`.

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};
use serde::Deserialize;
use std::net::SocketAddr;

pub const ENV_PREFIX: &str = "GROCERY";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub bind_address: String,
    pub database_path: String,
    /// The single front-end origin allowed by CORS
    pub cors_origin: String,
    pub max_connections: u32,
}

impl Config {
    pub fn load() -> Result<Self> {
        let builder = Self::defaults()?.add_source(Environment::with_prefix(ENV_PREFIX));
        Self::from_builder(builder)
    }

    fn defaults() -> std::result::Result<ConfigBuilder<DefaultState>, ConfigError> {
        config::Config::builder()
            .set_default("bind_address", "127.0.0.1:8000")?
            .set_default("database_path", "./shopping.db")?
            .set_default("cors_origin", "http://localhost:3000")?
            .set_default("max_connections", 5)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address: {}", self.bind_address))
    }

    pub fn cors_origin_header(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(&self.cors_origin)
            .with_context(|| format!("Invalid CORS origin: {}", self.cors_origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_builder(Config::defaults().unwrap()).unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8000");
        assert_eq!(config.database_path, "./shopping.db");
        assert_eq!(config.cors_origin, "http://localhost:3000");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.socket_addr().unwrap().port(), 8000);
    }

    #[test]
    fn test_overrides() {
        let builder = Config::defaults()
            .unwrap()
            .set_override("bind_address", "0.0.0.0:9000")
            .unwrap()
            .set_override("max_connections", 2)
            .unwrap();
        let config = Config::from_builder(builder).unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:9000");
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.database_path, "./shopping.db");
    }

    #[test]
    fn test_invalid_values_are_reported() {
        let mut config = Config::from_builder(Config::defaults().unwrap()).unwrap();
        config.bind_address = "not-an-address".to_string();
        config.cors_origin = "http://bad\norigin".to_string();

        assert!(config.socket_addr().is_err());
        assert!(config.cors_origin_header().is_err());
    }
}
