//! HTTP route handlers.
//!
//! The route table is built once at startup. Each group of routes carries its
//! own Cache-Control header: the landing page may be cached briefly, static
//! assets for a day, and the API and probe never.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod api;
pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{
    CACHE_CONTROL_HOME, CACHE_CONTROL_NO_STORE, CACHE_CONTROL_STATIC, PROBE_PATH,
};
use crate::http::static_files::create_static_service;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    let home_routes = Router::new()
        .route("/", get(home::index))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ));

    let api_routes = Router::new()
        .route("/api/health", get(api::health))
        .route("/api/version", get(api::version))
        .route(PROBE_PATH, get(health::health))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    let static_routes = Router::new()
        .nest_service("/static", create_static_service(&state.config.ui))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));

    Router::new()
        .merge(home_routes)
        .merge(api_routes)
        .merge(static_routes)
        .fallback(home::not_found)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
