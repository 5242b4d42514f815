//! Liveness probe endpoint for container orchestration.
//!
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service
//! is alive. Answers 200 while every registered indicator is up, 503 otherwise.

use axum::{extract::State, http::StatusCode, Json};

use crate::probe::ProbeReport;
use crate::state::AppState;

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<ProbeReport>) {
    let report = state.probe.check();
    let status = if report.is_up() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}
