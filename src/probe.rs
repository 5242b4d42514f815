//! Liveness probe built from independent health indicators.
//!
//! Each indicator returns a `ProbeReport`. The probe aggregates them: the
//! overall status is `UP` only if every indicator is `UP`, and the details of
//! all indicators are merged into one map (later indicators win on a key
//! collision).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::APP_NAME;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProbeStatus {
    Up,
    Down,
}

/// Status plus free-form details, as reported by one indicator or the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeReport {
    pub status: ProbeStatus,
    pub details: BTreeMap<String, String>,
}

impl ProbeReport {
    pub fn up() -> Self {
        Self {
            status: ProbeStatus::Up,
            details: BTreeMap::new(),
        }
    }

    pub fn down() -> Self {
        Self {
            status: ProbeStatus::Down,
            details: BTreeMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    pub fn is_up(&self) -> bool {
        self.status == ProbeStatus::Up
    }
}

pub type HealthIndicator = Box<dyn Fn() -> ProbeReport + Send + Sync>;

/// Registered indicators, fixed after startup.
#[derive(Default)]
pub struct HealthProbe {
    indicators: Vec<(&'static str, HealthIndicator)>,
}

impl HealthProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe with the application indicator registered.
    pub fn with_defaults() -> Self {
        let mut probe = Self::new();
        probe.register("app", Box::new(app_indicator));
        probe
    }

    pub fn register(&mut self, name: &'static str, indicator: HealthIndicator) {
        self.indicators.push((name, indicator));
    }

    pub fn indicator_names(&self) -> Vec<&'static str> {
        self.indicators.iter().map(|(name, _)| *name).collect()
    }

    pub fn check(&self) -> ProbeReport {
        let mut aggregate = ProbeReport::up();
        for (name, indicator) in &self.indicators {
            let report = indicator();
            if !report.is_up() {
                tracing::warn!(
                    indicator = %name,
                    details = ?report.details,
                    "Health indicator down"
                );
                aggregate.status = ProbeStatus::Down;
            }
            aggregate.details.extend(report.details);
        }
        aggregate
    }
}

/// Fixed report for the running process.
pub fn app_indicator() -> ProbeReport {
    ProbeReport::up()
        .with_detail("app", APP_NAME)
        .with_detail("status", "running")
}
