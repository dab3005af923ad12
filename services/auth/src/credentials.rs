//! Credential checking
//!
//! Every login goes through a [`CredentialVerifier`]. The shipped verifier
//! delegates to the store's plaintext lookup; a hashed-password verifier can
//! replace it without touching the login flow.

use std::sync::Arc;

use async_trait::async_trait;
use common::{Store, StoreResult};

/// Decides whether a username/password pair identifies a user
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> StoreResult<bool>;
}

/// Verifier backed by `Store::find_user`
#[derive(Clone)]
pub struct StoreCredentials {
    store: Arc<dyn Store>,
}

impl StoreCredentials {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CredentialVerifier for StoreCredentials {
    async fn verify(&self, username: &str, password: &str) -> StoreResult<bool> {
        self.store.find_user(username, password).await
    }
}
