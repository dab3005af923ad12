//! Common library for the movie catalog
//!
//! This crate provides the persistence layer shared by the services:
//! database connectivity, the `Store` contract with its adapters, the
//! persisted models and their error type.

pub mod database;
pub mod error;
pub mod models;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::Movie;
pub use store::{InMemoryStore, SqliteStore, Store};

/// Example usage of the store
///
/// ```rust,no_run
/// use common::{database::DatabaseConfig, SqliteStore, Store};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = SqliteStore::open(&DatabaseConfig::default()).await?;
///     let movies = store.get_movies().await?;
///     println!("{} movies in the catalog", movies.len());
///     store.close().await;
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
