//! Login flow: credential check followed by token issuance

use std::sync::Arc;

use common::StoreError;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    credentials::CredentialVerifier,
    jwt::{JwtService, TokenError},
};

/// Login failures
#[derive(Error, Debug)]
pub enum AuthError {
    /// No user matches the presented credentials
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The credential lookup failed
    #[error("Cannot find user: {0}")]
    Backend(#[from] StoreError),

    /// The token could not be signed
    #[error("Cannot generate token: {0}")]
    TokenSigning(#[from] TokenError),
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    credentials: Arc<dyn CredentialVerifier>,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(credentials: Arc<dyn CredentialVerifier>, jwt_service: JwtService) -> Self {
        Self {
            credentials,
            jwt_service,
        }
    }

    /// Check the credentials and issue a signed token for the user
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        info!("Login attempt for user: {}", username);

        let found = self.credentials.verify(username, password).await.map_err(|e| {
            error!("Cannot find user: {}", e);
            AuthError::Backend(e)
        })?;

        if !found {
            warn!("Invalid credentials for user: {}", username);
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.jwt_service.issue(username).map_err(|e| {
            error!("Cannot generate token: {}", e);
            AuthError::TokenSigning(e)
        })?;

        Ok(token)
    }

    /// Lifetime of the issued tokens in seconds
    pub fn token_ttl(&self) -> u64 {
        self.jwt_service.token_ttl()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{credentials::StoreCredentials, jwt::JwtConfig};
    use async_trait::async_trait;
    use common::{InMemoryStore, StoreResult};

    struct BrokenBackend;

    #[async_trait]
    impl CredentialVerifier for BrokenBackend {
        async fn verify(&self, _username: &str, _password: &str) -> StoreResult<bool> {
            Err(StoreError::Configuration("backend offline".to_string()))
        }
    }

    fn jwt() -> JwtService {
        JwtService::new(&JwtConfig::new("training.go")).unwrap()
    }

    fn service() -> AuthService {
        let store = Arc::new(InMemoryStore::new().with_user("golang", "training"));
        AuthService::new(Arc::new(StoreCredentials::new(store)), jwt())
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let token = service().login("golang", "training").await.unwrap();

        let claims = jwt().verify(&token).unwrap();
        assert_eq!(claims.username, "golang");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[tokio::test]
    async fn test_unknown_user_is_rejected() {
        let err = service().login("alice", "secret").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_backend_failure_is_not_a_credential_error() {
        let service = AuthService::new(Arc::new(BrokenBackend), jwt());

        let err = service.login("golang", "training").await.unwrap_err();
        assert!(matches!(err, AuthError::Backend(_)));
    }
}
