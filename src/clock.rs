//! Request timestamps in epoch milliseconds.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// Wall clock that never goes backwards.
///
/// Returns the current epoch milliseconds, or the last value handed out if the
/// system clock has stepped back since. Shared across handlers through `AppState`.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last_ms: AtomicI64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_millis(&self) -> i64 {
        self.observe(Utc::now().timestamp_millis())
    }

    fn observe(&self, wall_ms: i64) -> i64 {
        let previous = self.last_ms.fetch_max(wall_ms, Ordering::AcqRel);
        previous.max(wall_ms)
    }
}
