use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Counters describing how a track treated its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetrics {
    pub accepted: usize,
    pub duplicates: usize,
    pub decimations: usize,
    pub turn_overrides: usize,
    pub line_start_anchors: usize,
    pub line_end_saves: usize,
    pub narrow_swaths: usize,
}

pub struct MetricsRecorder {
    inner: Mutex<TrackMetrics>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(TrackMetrics::default()),
        }
    }

    fn bump(&self, update: impl FnOnce(&mut TrackMetrics)) {
        if let Ok(mut metrics) = self.inner.lock() {
            update(&mut metrics);
        }
    }

    pub fn record_accepted(&self) {
        self.bump(|m| m.accepted += 1);
    }

    pub fn record_duplicate(&self) {
        self.bump(|m| m.duplicates += 1);
    }

    pub fn record_decimation(&self) {
        self.bump(|m| m.decimations += 1);
    }

    pub fn record_turn_override(&self) {
        self.bump(|m| m.turn_overrides += 1);
    }

    pub fn record_line_start_anchor(&self) {
        self.bump(|m| m.line_start_anchors += 1);
    }

    pub fn record_line_end_save(&self) {
        self.bump(|m| m.line_end_saves += 1);
    }

    pub fn record_narrow_swath(&self) {
        self.bump(|m| m.narrow_swaths += 1);
    }

    pub fn snapshot(&self) -> TrackMetrics {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            TrackMetrics::default()
        }
    }

    pub fn reset(&self) {
        self.bump(|m| *m = TrackMetrics::default());
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
