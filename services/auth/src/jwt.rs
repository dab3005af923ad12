//! JWT service for token generation and validation
//!
//! Tokens are HS256-signed with a symmetric secret shared by signing and
//! verification. Expiry is enforced without leeway: a token is valid from its
//! issue time up to, but excluding, its `exp` second.

use std::{collections::HashSet, time::Duration};

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Default token lifetime: one hour
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Symmetric key used to sign and verify tokens
    pub secret: String,
    /// Token lifetime
    pub token_ttl: Duration,
}

impl JwtConfig {
    /// Configuration with the default one hour lifetime
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }
}

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated user
    pub username: String,
    /// Issued at time
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
}

/// Token failures
#[derive(Error, Debug)]
pub enum TokenError {
    /// The configured secret cannot be used
    #[error("Invalid signing key: {0}")]
    InvalidKey(String),

    /// The claim set could not be signed
    #[error("Failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Malformed token or bad signature
    #[error("Invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    /// The token reached its expiry
    #[error("Token expired")]
    Expired,

    /// Issue time plus lifetime does not fit a timestamp
    #[error("Token expiry out of range")]
    ExpiryOutOfRange,
}

/// JWT service
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_ttl: i64,
}

impl JwtService {
    /// Initialize a new JWT service
    pub fn new(config: &JwtConfig) -> Result<Self, TokenError> {
        if config.secret.is_empty() {
            return Err(TokenError::InvalidKey("secret must not be empty".to_string()));
        }

        let token_ttl = i64::try_from(config.token_ttl.as_secs())
            .map_err(|_| TokenError::InvalidKey("token lifetime is too large".to_string()))?;

        // Expiry is checked by `verify_at` against an explicit clock.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.required_spec_claims = HashSet::from(["exp".to_string()]);

        Ok(JwtService {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            token_ttl,
        })
    }

    /// Issue a token for `username`, valid from now
    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        self.issue_at(username, Utc::now().timestamp())
    }

    /// Issue a token for `username` as if the current time were `now`
    pub fn issue_at(&self, username: &str, now: i64) -> Result<String, TokenError> {
        let exp = now
            .checked_add(self.token_ttl)
            .ok_or(TokenError::ExpiryOutOfRange)?;
        let claims = Claims {
            username: username.to_string(),
            iat: now,
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Validate a token and return the claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Validate a token against the clock value `now`
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(TokenError::Invalid)?
            .claims;

        if now >= claims.exp {
            debug!("Rejected expired token for {}", claims.username);
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    /// Token lifetime in seconds
    pub fn token_ttl(&self) -> u64 {
        self.token_ttl.unsigned_abs()
    }
}
