//! SQLite-backed store

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::Store;
use crate::{
    database::{DatabaseConfig, ensure_schema, health_check, init_pool},
    error::{StoreError, StoreResult},
    models::Movie,
};

/// Store over a SQLite connection pool
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connect to the database and make sure the tables exist
    pub async fn open(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = init_pool(config).await?;
        ensure_schema(&pool).await?;
        info!("Connected to database at {}", config.database_url);

        Ok(Self { pool })
    }

    /// Wrap an existing pool. The schema is not touched.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// The underlying pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn close(&self) {
        self.pool.close().await;
        info!("Database connection pool closed");
    }

    async fn ping(&self) -> StoreResult<()> {
        health_check(&self.pool).await.map(|_| ())
    }

    async fn get_movies(&self) -> StoreResult<Vec<Movie>> {
        let movies = sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, release_date, duration, trailer_url
            FROM movie
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Query)?;

        debug!("Loaded {} movies", movies.len());
        Ok(movies)
    }

    async fn get_movie_by_id(&self, id: i64) -> StoreResult<Movie> {
        sqlx::query_as::<_, Movie>(
            r#"
            SELECT id, title, release_date, duration, trailer_url
            FROM movie
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::Query)?
        .ok_or(StoreError::NotFound(id))
    }

    async fn create_movie(&self, movie: &mut Movie) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO movie (title, release_date, duration, trailer_url)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.release_date)
        .bind(movie.duration)
        .bind(&movie.trailer_url)
        .execute(&self.pool)
        .await
        .map_err(StoreError::Write)?;

        movie.id = result.last_insert_rowid();
        debug!("Created movie {}", movie.id);
        Ok(())
    }

    async fn update_movie(&self, id: i64, movie: &Movie) -> StoreResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE movie
            SET title = ?, release_date = ?, duration = ?, trailer_url = ?
            WHERE id = ?
            "#,
        )
        .bind(&movie.title)
        .bind(&movie.release_date)
        .bind(movie.duration)
        .bind(&movie.trailer_url)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(StoreError::Write)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        debug!("Updated movie {}", id);
        Ok(())
    }

    async fn delete_movie_by_id(&self, id: i64) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM movie WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::Write)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        debug!("Deleted movie {}", id);
        Ok(())
    }

    async fn find_user(&self, username: &str, password: &str) -> StoreResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(id) FROM user WHERE user = ? AND password = ?")
                .bind(username)
                .bind(password)
                .fetch_one(&self.pool)
                .await
                .map_err(StoreError::Query)?;

        Ok(count == 1)
    }
}
