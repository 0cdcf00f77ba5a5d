//! Health check endpoint for container orchestration.
//!
//! Used by Kubernetes liveness and readiness probes, load balancers,
//! and deployment tooling to verify the service answers HTTP.

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health check payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub app_name: String,
    pub version: String,
    pub environment: String,
}

/// Health check handler.
///
/// Reports process-up unconditionally; no downstream dependency is
/// probed.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
        app_name: state.config.app_name.clone(),
        version: state.config.app_version.clone(),
        environment: state.config.environment.clone(),
    })
}
