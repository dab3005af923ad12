//! API service routes

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    handlers::{auth, movies},
    middleware::{auth_middleware, log_request},
    state::AppState,
};

/// Create the router for the API service
///
/// Every `/movies` route requires a valid bearer token. The request logger
/// wraps all routes, public ones included.
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/movies", get(movies::list_movies).post(movies::create_movie))
        .route(
            "/movies/:id",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/", get(auth::index))
        .route("/health", get(auth::health_check))
        .route("/token", post(auth::create_token))
        .merge(protected_routes)
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}
