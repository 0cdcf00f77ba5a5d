//! Handler for the home page.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Home page handler, rendered from `index.html`.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = tera::Context::new();
    context.insert("app_name", &state.config.app_name);
    context.insert("version", &state.config.app_version);
    context.insert("environment", &state.config.environment);

    let html = state.tera.render("index.html", &context)?;
    Ok(Html(html))
}
