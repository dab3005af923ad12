//! API models for request and response payloads

use common::Movie;
use serde::{Deserialize, Serialize};

/// Request for user login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for token generation
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Movie fields accepted on create and update.
///
/// An `id` sent by the client is ignored; the path or the store decides it.
#[derive(Debug, Clone, Deserialize)]
pub struct MovieRequest {
    pub title: String,
    pub release_date: String,
    pub duration: i64,
    pub trailer_url: String,
}

impl From<MovieRequest> for Movie {
    fn from(req: MovieRequest) -> Self {
        Movie::new(req.title, req.release_date, req.duration, req.trailer_url)
    }
}
