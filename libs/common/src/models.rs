//! Persisted entities shared by every service

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Movie entity
///
/// An `id` of `0` marks a record that has not been persisted yet; the store
/// assigns the real id on creation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, FromRow)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub release_date: String,
    pub duration: i64,
    pub trailer_url: String,
}

impl Movie {
    /// Build an unpersisted movie
    pub fn new(
        title: impl Into<String>,
        release_date: impl Into<String>,
        duration: i64,
        trailer_url: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            release_date: release_date.into(),
            duration,
            trailer_url: trailer_url.into(),
        }
    }

    /// Whether the store has assigned an id to this record
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_movie_is_not_persisted() {
        let movie = Movie::new("Inception", "2010-07-18", 148, "http://url");
        assert_eq!(movie.id, 0);
        assert!(!movie.is_persisted());
    }

    #[test]
    fn movie_json_uses_snake_case_fields() {
        let movie = Movie {
            id: 7,
            ..Movie::new("Alien", "1979-05-25", 117, "http://alien")
        };

        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["release_date"], "1979-05-25");
        assert_eq!(value["trailer_url"], "http://alien");
    }
}
