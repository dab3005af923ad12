//! Movie resource handlers

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use common::{Movie, StoreError};
use tracing::{error, info, warn};

use crate::{
    error::{ApiError, ApiResult},
    middleware::AuthUser,
    models::MovieRequest,
    state::AppState,
};

fn parse_movie_id(raw: &str) -> ApiResult<i64> {
    raw.parse().map_err(|e| {
        warn!("Cannot parse id {:?} to int: {}", raw, e);
        ApiError::BadRequest("Invalid movie ID".to_string())
    })
}

fn decode_movie(payload: Result<Json<MovieRequest>, JsonRejection>) -> ApiResult<Movie> {
    let Json(request) = payload.map_err(|e| {
        warn!("Cannot parse movie body: {}", e);
        ApiError::from(e)
    })?;
    Ok(request.into())
}

/// Log a store failure at a level matching its cause
fn store_error(action: &'static str) -> impl FnOnce(StoreError) -> ApiError {
    move |e| {
        if e.is_not_found() {
            warn!("Cannot {}: {}", action, e);
        } else {
            error!("Cannot {}: {}", action, e);
        }
        ApiError::Store(e)
    }
}

/// List every movie
pub async fn list_movies(State(state): State<AppState>) -> ApiResult<Json<Vec<Movie>>> {
    let movies = state
        .store
        .get_movies()
        .await
        .map_err(store_error("load movies"))?;

    Ok(Json(movies))
}

/// Get a movie by ID
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Movie>> {
    let id = parse_movie_id(&id)?;
    let movie = state
        .store
        .get_movie_by_id(id)
        .await
        .map_err(store_error("load movie"))?;

    Ok(Json(movie))
}

/// Create a movie
pub async fn create_movie(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> ApiResult<Json<Movie>> {
    let mut movie = decode_movie(payload)?;

    state
        .store
        .create_movie(&mut movie)
        .await
        .map_err(store_error("create movie"))?;

    info!("Movie {} created by {}", movie.id, user.username);
    Ok(Json(movie))
}

/// Replace a movie and return the stored row
pub async fn update_movie(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
    payload: Result<Json<MovieRequest>, JsonRejection>,
) -> ApiResult<Json<Movie>> {
    let id = parse_movie_id(&id)?;
    let movie = decode_movie(payload)?;

    state
        .store
        .update_movie(id, &movie)
        .await
        .map_err(store_error("update movie"))?;

    let updated = state
        .store
        .get_movie_by_id(id)
        .await
        .map_err(store_error("retrieve updated movie"))?;

    info!("Movie {} updated by {}", id, user.username);
    Ok(Json(updated))
}

/// Delete a movie
pub async fn delete_movie(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_movie_id(&id)?;

    state
        .store
        .delete_movie_by_id(id)
        .await
        .map_err(store_error("delete movie"))?;

    info!("Movie {} deleted by {}", id, user.username);
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, "application/json")]))
}
