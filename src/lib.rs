//! demo-app: a minimal demonstration web application.
//!
//! Serves a landing page showing the configured version, two JSON endpoints
//! (`/api/health`, `/api/version`) and a liveness probe.

pub mod clock;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod models;
pub mod probe;
pub mod routes;
pub mod state;
pub mod templates;

pub use config::AppConfig;
pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
