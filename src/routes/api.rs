//! JSON status endpoints used by CI/CD pipelines and dashboards.

use axum::{extract::State, Json};
use tracing::instrument;

use crate::config::APP_NAME;
use crate::models::{HealthStatus, VersionInfo};
use crate::state::AppState;

/// `GET /api/health`: always `UP`, stamped with the request time.
#[instrument(name = "api::health", skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus::up(state.version(), state.clock.now_millis()))
}

/// `GET /api/version`
#[instrument(name = "api::version", skip(state))]
pub async fn version(State(state): State<AppState>) -> Json<VersionInfo> {
    Json(VersionInfo {
        version: state.version().to_string(),
        app_name: APP_NAME.to_string(),
    })
}
