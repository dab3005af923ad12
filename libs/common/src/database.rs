//! Database module for handling SQLite connections and schema
//!
//! This module provides connection pooling, configuration, schema creation
//! and health checks for the relational backend.

use std::{str::FromStr, time::Duration};

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::{error, info};

use crate::error::{StoreError, StoreResult};

/// Statements run on every start. Each one is idempotent.
const SCHEMA: [&str; 2] = [
    r#"
    CREATE TABLE IF NOT EXISTS movie
    (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT,
        release_date TEXT,
        duration INTEGER,
        trailer_url TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user
    (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user TEXT,
        password TEXT
    )
    "#,
];

/// Database configuration struct
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database connection URL
    pub database_url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Pool acquire timeout in seconds
    pub connection_timeout: u64,
}

impl DatabaseConfig {
    /// Configuration for the given URL with default pool sizing
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    /// A private in-memory database.
    ///
    /// Every SQLite connection to `:memory:` sees its own database, so the
    /// pool is pinned to a single connection.
    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            connection_timeout: 5,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://movies.db".to_string(),
            max_connections: 5,
            connection_timeout: 30,
        }
    }
}

/// Initialize a SQLite connection pool
///
/// The database file is created when it does not exist yet.
pub async fn init_pool(config: &DatabaseConfig) -> StoreResult<SqlitePool> {
    info!("Initializing database connection pool");

    let options = SqliteConnectOptions::from_str(&config.database_url)
        .map_err(|e| StoreError::Configuration(format!("Invalid database URL: {}", e)))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connection_timeout))
        .connect_with(options)
        .await
        .map_err(StoreError::Connection)?;

    info!("Database connection pool initialized successfully");
    Ok(pool)
}

/// Create the movie and user tables when they are absent
pub async fn ensure_schema(pool: &SqlitePool) -> StoreResult<()> {
    for statement in SCHEMA {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| {
                error!("Failed to create schema: {}", e);
                StoreError::Connection(e)
            })?;
    }

    Ok(())
}

/// Check database connectivity
pub async fn health_check(pool: &SqlitePool) -> StoreResult<bool> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(StoreError::Query)?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.database_url, "sqlite://movies.db");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.connection_timeout, 30);
    }

    #[test]
    fn test_database_config_new_keeps_pool_defaults() {
        let config = DatabaseConfig::new("sqlite://other.db");
        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.max_connections, 5);
    }

    #[tokio::test]
    async fn test_schema_creation_is_idempotent() {
        let pool = init_pool(&DatabaseConfig::in_memory()).await.unwrap();

        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();

        assert!(health_check(&pool).await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_configuration_error() {
        let err = init_pool(&DatabaseConfig::new("sqlite://movies.db?mode=bogus"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Configuration(_)));
    }
}
