//! Custom error types for the common library
//!
//! This module defines the errors raised by the persistence layer. Every
//! `Store` implementation reports failures through `StoreError` so callers
//! can tell a missing row apart from a broken backend.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend is unreachable or the schema could not be created
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),

    /// No movie row matches the requested id
    #[error("Movie {0} not found")]
    NotFound(i64),

    /// Error occurred during a read
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// Error occurred during an insert, update or delete
    #[error("Database write error: {0}")]
    Write(#[source] SqlxError),
}

impl StoreError {
    /// Whether the error means the addressed row does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
