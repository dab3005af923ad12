//! Movie catalog HTTP API
//!
//! Routes, handlers and middleware over the `common` store and the `auth`
//! token service. The binary in `main.rs` wires them to configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
