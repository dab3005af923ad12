//! Contract tests for the `Store` adapters
//!
//! The same scenarios run against the SQLite adapter and the in-memory one,
//! so both are held to identical behaviour.

use common::{InMemoryStore, Movie, SqliteStore, Store, StoreError, database::DatabaseConfig};

const USERNAME: &str = "golang";
const PASSWORD: &str = "training";

async fn sqlite_store() -> SqliteStore {
    let store = SqliteStore::open(&DatabaseConfig::in_memory())
        .await
        .expect("failed to open in-memory database");

    sqlx::query("INSERT INTO user (user, password) VALUES (?, ?)")
        .bind(USERNAME)
        .bind(PASSWORD)
        .execute(store.pool())
        .await
        .expect("failed to provision user");

    store
}

fn memory_store() -> InMemoryStore {
    InMemoryStore::new().with_user(USERNAME, PASSWORD)
}

fn inception() -> Movie {
    Movie::new("Inception", "2010-07-18", 148, "http://url")
}

async fn created_movie_reads_back(store: &dyn Store) {
    let mut movie = inception();
    store.create_movie(&mut movie).await.unwrap();
    assert!(movie.is_persisted());

    let stored = store.get_movie_by_id(movie.id).await.unwrap();
    assert_eq!(stored, movie);
    assert_eq!(stored.title, "Inception");
    assert_eq!(stored.duration, 148);
}

async fn empty_catalog_lists_nothing(store: &dyn Store) {
    assert_eq!(store.get_movies().await.unwrap(), Vec::<Movie>::new());
}

async fn listing_returns_every_movie(store: &dyn Store) {
    let mut first = inception();
    let mut second = Movie::new("Interstellar", "2014-11-07", 169, "http://interstellar");
    store.create_movie(&mut first).await.unwrap();
    store.create_movie(&mut second).await.unwrap();
    assert_ne!(first.id, second.id);

    let movies = store.get_movies().await.unwrap();
    assert_eq!(movies.len(), 2);
    assert!(movies.contains(&first));
    assert!(movies.contains(&second));
}

async fn missing_movie_is_not_found(store: &dyn Store) {
    let err = store.get_movie_by_id(999).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(999)));
}

async fn delete_twice_reports_not_found(store: &dyn Store) {
    let mut movie = inception();
    store.create_movie(&mut movie).await.unwrap();

    store.delete_movie_by_id(movie.id).await.unwrap();
    let err = store.delete_movie_by_id(movie.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert!(store.get_movie_by_id(movie.id).await.unwrap_err().is_not_found());
}

async fn update_overwrites_fields(store: &dyn Store) {
    let mut movie = inception();
    store.create_movie(&mut movie).await.unwrap();

    let changes = Movie::new("Inception (IMAX)", "2010-07-16", 150, "http://imax");
    store.update_movie(movie.id, &changes).await.unwrap();

    let stored = store.get_movie_by_id(movie.id).await.unwrap();
    assert_eq!(stored.id, movie.id);
    assert_eq!(stored.title, "Inception (IMAX)");
    assert_eq!(stored.release_date, "2010-07-16");
    assert_eq!(stored.duration, 150);
    assert_eq!(stored.trailer_url, "http://imax");
}

async fn update_of_missing_movie_is_not_found(store: &dyn Store) {
    let err = store.update_movie(404, &inception()).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(404)));
}

async fn duration_beyond_32_bits_is_kept(store: &dyn Store) {
    let mut movie = Movie::new("Empire", "1964-01-01", 3_000_000_000, "http://empire");
    store.create_movie(&mut movie).await.unwrap();
    assert_eq!(store.get_movie_by_id(movie.id).await.unwrap().duration, 3_000_000_000);

    let longer = Movie::new("Empire", "1964-01-01", i64::MAX, "http://empire");
    store.update_movie(movie.id, &longer).await.unwrap();

    let movies = store.get_movies().await.unwrap();
    assert_eq!(movies[0].duration, i64::MAX);
}

async fn find_user_matches_exactly(store: &dyn Store) {
    assert!(store.find_user(USERNAME, PASSWORD).await.unwrap());
    assert!(!store.find_user("GOLANG", PASSWORD).await.unwrap());
    assert!(!store.find_user(USERNAME, "Training").await.unwrap());
    assert!(!store.find_user("alice", "secret").await.unwrap());
    assert!(!store.find_user("", "").await.unwrap());
}

macro_rules! contract_suite {
    ($module:ident, $store:expr) => {
        mod $module {
            use super::*;

            #[tokio::test]
            async fn created_movie_reads_back() {
                super::created_movie_reads_back(&$store).await;
            }

            #[tokio::test]
            async fn empty_catalog_lists_nothing() {
                super::empty_catalog_lists_nothing(&$store).await;
            }

            #[tokio::test]
            async fn listing_returns_every_movie() {
                super::listing_returns_every_movie(&$store).await;
            }

            #[tokio::test]
            async fn missing_movie_is_not_found() {
                super::missing_movie_is_not_found(&$store).await;
            }

            #[tokio::test]
            async fn delete_twice_reports_not_found() {
                super::delete_twice_reports_not_found(&$store).await;
            }

            #[tokio::test]
            async fn update_overwrites_fields() {
                super::update_overwrites_fields(&$store).await;
            }

            #[tokio::test]
            async fn update_of_missing_movie_is_not_found() {
                super::update_of_missing_movie_is_not_found(&$store).await;
            }

            #[tokio::test]
            async fn duration_beyond_32_bits_is_kept() {
                super::duration_beyond_32_bits_is_kept(&$store).await;
            }

            #[tokio::test]
            async fn find_user_matches_exactly() {
                super::find_user_matches_exactly(&$store).await;
            }
        }
    };
}

contract_suite!(sqlite, sqlite_store().await);
contract_suite!(in_memory, memory_store());
