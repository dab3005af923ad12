//! Persistence contract for movies and user credentials
//!
//! Handlers only ever see `dyn Store`. Two adapters implement it:
//! [`SqliteStore`] for production and [`InMemoryStore`] for tests.

use async_trait::async_trait;

use crate::{error::StoreResult, models::Movie};

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;

/// Movie catalog and credential storage.
///
/// Every operation is a single round trip to the backend. Nothing is cached:
/// each read reflects the backend at the time of the call.
#[async_trait]
pub trait Store: Send + Sync {
    /// Release the backend connections
    async fn close(&self);

    /// Round-trip the backend to prove it is reachable
    async fn ping(&self) -> StoreResult<()>;

    /// All movies. An empty catalog yields an empty vector.
    async fn get_movies(&self) -> StoreResult<Vec<Movie>>;

    /// The movie with the given id, or `StoreError::NotFound`
    async fn get_movie_by_id(&self, id: i64) -> StoreResult<Movie>;

    /// Insert `movie`, ignoring its id, and write the assigned id back onto it
    async fn create_movie(&self, movie: &mut Movie) -> StoreResult<()>;

    /// Overwrite every field but the id of the row matching `id`.
    ///
    /// Fails with `StoreError::NotFound` when no row matched.
    async fn update_movie(&self, id: i64, movie: &Movie) -> StoreResult<()>;

    /// Physically remove the row matching `id`.
    ///
    /// Fails with `StoreError::NotFound` when no row matched.
    async fn delete_movie_by_id(&self, id: i64) -> StoreResult<()>;

    /// Whether exactly one user matches both `username` and `password`.
    ///
    /// Comparison is exact and case-sensitive.
    async fn find_user(&self, username: &str, password: &str) -> StoreResult<bool>;
}
