//! Authentication for the movie catalog
//!
//! Validates credentials and issues the signed, time-limited bearer tokens
//! that the API checks on every protected request.

pub mod credentials;
pub mod jwt;
pub mod service;

pub use credentials::{CredentialVerifier, StoreCredentials};
pub use jwt::{Claims, JwtConfig, JwtService, TokenError};
pub use service::{AuthError, AuthService};
