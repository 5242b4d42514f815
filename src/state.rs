//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::clock::MonotonicClock;
use crate::config::AppConfig;
use crate::probe::HealthProbe;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Everything here is read-only after startup apart from the clock, which only
/// moves forward.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
    pub probe: Arc<HealthProbe>,
    pub clock: Arc<MonotonicClock>,
}

impl AppState {
    /// Creates a new application state from the given configuration, templates, and probe.
    pub fn new(config: AppConfig, tera: Tera, probe: HealthProbe) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            probe: Arc::new(probe),
            clock: Arc::new(MonotonicClock::new()),
        }
    }

    /// Configured version string.
    pub fn version(&self) -> &str {
        &self.config.app.version
    }
}
