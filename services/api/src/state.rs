//! Application state shared across handlers

use std::sync::Arc;

use auth::{AuthService, JwtService};
use common::Store;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub auth_service: AuthService,
    pub jwt_service: JwtService,
}
