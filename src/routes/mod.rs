//! HTTP route handlers for the demo service.
//!
//! Every route is an exact method+path match. Unmatched requests fall
//! through to a JSON 404 handler so the error envelope is uniform
//! across the whole surface.

pub mod echo;
pub mod health;
pub mod home;
pub mod info;
pub mod status;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::error::AppError;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and the JSON fallback.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .route("/api/info", get(info::info))
        .route("/api/echo", post(echo::echo))
        .route("/status", get(status::status))
        .fallback(not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}

/// Fallback handler for unmatched routes.
async fn not_found() -> AppError {
    AppError::NotFound
}
