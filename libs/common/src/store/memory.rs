//! In-memory store
//!
//! Intended for tests/dev. Honours the same contract as the SQLite adapter.

use std::{
    collections::BTreeMap,
    sync::{RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use async_trait::async_trait;
use tracing::debug;

use super::Store;
use crate::{
    error::{StoreError, StoreResult},
    models::Movie,
};

#[derive(Debug, Default)]
struct Tables {
    last_id: i64,
    movies: BTreeMap<i64, Movie>,
    users: Vec<(String, String)>,
}

/// Store keeping every row in process memory
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision a user row
    pub fn with_user(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.write().users.push((username.into(), password.into()));
        self
    }

    /// Seed movies, assigning ids in order
    pub fn with_movies(self, movies: impl IntoIterator<Item = Movie>) -> Self {
        {
            let mut tables = self.write();
            for mut movie in movies {
                tables.last_id += 1;
                movie.id = tables.last_id;
                tables.movies.insert(movie.id, movie);
            }
        }
        self
    }

    // A poisoned lock only means a test panicked mid-write; the maps are
    // still structurally valid.
    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn close(&self) {}

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    async fn get_movies(&self) -> StoreResult<Vec<Movie>> {
        Ok(self.read().movies.values().cloned().collect())
    }

    async fn get_movie_by_id(&self, id: i64) -> StoreResult<Movie> {
        self.read()
            .movies
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn create_movie(&self, movie: &mut Movie) -> StoreResult<()> {
        let mut tables = self.write();
        tables.last_id += 1;
        movie.id = tables.last_id;
        tables.movies.insert(movie.id, movie.clone());

        debug!("Created movie {}", movie.id);
        Ok(())
    }

    async fn update_movie(&self, id: i64, movie: &Movie) -> StoreResult<()> {
        let mut tables = self.write();
        let stored = tables.movies.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        stored.title = movie.title.clone();
        stored.release_date = movie.release_date.clone();
        stored.duration = movie.duration;
        stored.trailer_url = movie.trailer_url.clone();
        Ok(())
    }

    async fn delete_movie_by_id(&self, id: i64) -> StoreResult<()> {
        self.write()
            .movies
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    async fn find_user(&self, username: &str, password: &str) -> StoreResult<bool> {
        let matches = self
            .read()
            .users
            .iter()
            .filter(|(user, pass)| user == username && pass == password)
            .count();

        Ok(matches == 1)
    }
}
