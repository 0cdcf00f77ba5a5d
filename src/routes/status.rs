//! Status page rendering application and host state as HTML.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::sysinfo::SystemInfo;

/// Status page handler, rendered from `status.html`.
///
/// Carries the same data as the health endpoint plus a fresh system
/// snapshot.
#[instrument(name = "status::status", skip(state))]
pub async fn status(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let system_info = SystemInfo::collect(&state.config.environment);

    let mut context = tera::Context::new();
    context.insert("app_name", &state.config.app_name);
    context.insert("version", &state.config.app_version);
    context.insert("environment", &state.config.environment);
    context.insert("system_info", &system_info);

    let html = state.tera.render("status.html", &context)?;
    Ok(Html(html))
}
