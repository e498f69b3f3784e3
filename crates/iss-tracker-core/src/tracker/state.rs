use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::position::Position;

/// Everything a renderer needs to know about the tracker at one instant.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TrackerSnapshot {
    /// Last accepted reading, or the `(0, 0)` placeholder.
    pub position: Position,
    /// Fetches that finished, successful or not.
    pub completed_ticks: u64,
    /// When `position` was last replaced.
    pub last_update: Option<DateTime<Utc>>,
}

impl TrackerSnapshot {
    /// Replace the position wholesale with a fresh reading.
    pub fn record_success(&mut self, position: Position, at: DateTime<Utc>) {
        self.position = position;
        self.last_update = Some(at);
        self.completed_ticks += 1;
    }

    /// Count a failed fetch. The position is left stale.
    pub fn record_failure(&mut self) {
        self.completed_ticks += 1;
    }

    pub fn has_reading(&self) -> bool {
        self.last_update.is_some()
    }
}
