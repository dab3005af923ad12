//! Request logging and bearer token authentication

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

/// Authenticated user information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
}

/// Log every request with its method, path, status and latency
pub async fn log_request(req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let span = info_span!(
        "request",
        %request_id,
        method = %req.method(),
        path = %req.uri().path()
    );

    async move {
        let started = Instant::now();
        info!("Request started");

        let response = next.run(req).await;

        info!(
            status = response.status().as_u16(),
            elapsed = ?started.elapsed(),
            "Request finished"
        );
        response
    }
    .instrument(span)
    .await
}

/// Authentication middleware
///
/// Rejects the request with 401 unless it carries a bearer token that was
/// signed with the configured secret and has not expired.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let TypedHeader(authorization) = bearer.ok_or_else(|| {
        warn!("Missing or malformed bearer token");
        ApiError::Unauthorized
    })?;

    let claims = state.jwt_service.verify(authorization.token()).map_err(|e| {
        warn!("Failed to validate token: {}", e);
        ApiError::Unauthorized
    })?;

    req.extensions_mut().insert(AuthUser {
        username: claims.username,
    });

    Ok(next.run(req).await)
}
