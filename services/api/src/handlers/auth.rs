//! Public endpoints: welcome page, health check and token issuance

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::json;
use tracing::error;

use crate::{
    error::{ApiError, ApiResult},
    models::{LoginRequest, TokenResponse},
    state::AppState,
};

/// Welcome endpoint
pub async fn index() -> &'static str {
    "Welcome to the movie catalog"
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    state.store.ping().await.map_err(|e| {
        error!("Database health check failed: {}", e);
        ApiError::ServiceUnavailable
    })?;

    Ok(Json(json!({
        "status": "ok",
        "service": "movie-api"
    })))
}

/// Exchange credentials for a bearer token
pub async fn create_token(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(payload) = payload.map_err(|e| {
        error!("Cannot parse login body: {}", e);
        ApiError::from(e)
    })?;

    let token = state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?;

    Ok(Json(TokenResponse {
        token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth_service.token_ttl(),
    }))
}
