//! Response bodies for the JSON API.

use serde::{Deserialize, Serialize};

/// Status literal reported by `/api/health`.
pub const STATUS_UP: &str = "UP";

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    /// Epoch milliseconds at request time
    pub timestamp: i64,
}

impl HealthStatus {
    pub fn up(version: &str, timestamp: i64) -> Self {
        Self {
            status: STATUS_UP.to_string(),
            version: version.to_string(),
            timestamp,
        }
    }
}

/// Body of `GET /api/version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub version: String,
    pub app_name: String,
}
