//! Landing page and not-found fallback.

use axum::{extract::State, http::Uri, response::Html};
use tracing::instrument;

use crate::config::{APP_NAME, PROBE_PATH};
use crate::error::AppError;
use crate::state::AppState;

/// Landing page handler. Renders `index.html` with the configured version.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = tera::Context::new();
    context.insert("version", state.version());
    context.insert("app_name", APP_NAME);
    context.insert("probe_path", PROBE_PATH);

    let html = state.tera.render("index.html", &context)?;
    Ok(Html(html))
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::NotFound(uri.path().to_string())
}
