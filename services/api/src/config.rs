//! Service configuration
//!
//! Settings are layered: built-in defaults, then an optional config file,
//! then `APP__`-prefixed environment variables
//! (`APP__SERVER__PORT`, `APP__DATABASE__URL`, `APP__JWT__SECRET`, ...).

use std::time::Duration;

use auth::JwtConfig;
use common::database::DatabaseConfig;
use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Default config file, looked up relative to the working directory
const DEFAULT_CONFIG_FILE: &str = "config/api";

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    /// `host:port` string for binding
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    /// Pool acquire timeout in seconds
    pub connection_timeout: u64,
}

/// Token settings
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: String,
    /// Token lifetime in seconds
    pub token_ttl: u64,
}

/// Complete service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub jwt: JwtSettings,
}

impl Settings {
    /// Load settings from the default file (or `APP_CONFIG_FILE`) and the environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var("APP_CONFIG_FILE")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&file)
    }

    /// Load settings, reading the optional config file at `file`
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let settings: Settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 9000)?
            .set_default("database.url", "sqlite://movies.db")?
            .set_default("database.max_connections", 5)?
            .set_default("database.connection_timeout", 30)?
            .set_default("jwt.token_ttl", 3600)?
            .add_source(File::with_name(file).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        if settings.jwt.secret.is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".to_string()));
        }

        Ok(settings)
    }

    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig {
            database_url: self.database.url.clone(),
            max_connections: self.database.max_connections,
            connection_timeout: self.database.connection_timeout,
        }
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.jwt.secret.clone(),
            token_ttl: Duration::from_secs(self.jwt.token_ttl),
        }
    }
}
