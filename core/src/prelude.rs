use serde::{Deserialize, Serialize};

pub use crate::processing::{CoverageModel, PassThroughCoverage, SwathTrack};
pub use crate::survey::{Side, SwathPoint, SwathRecord};

/// Shared configuration for a swath track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Distance travelled between decimation events, in map units.
    pub interval: f64,
    /// Side whose minimum width governs boundary selection.
    pub output_side: Side,
    /// Output-side widths below this are reported as narrow. Zero disables the check.
    pub min_allowable_swath: f64,
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            interval: 10.0,
            output_side: Side::Unknown,
            min_allowable_swath: 0.0,
        }
    }
}

impl TrackConfig {
    pub fn validate(&self) -> SwathResult<()> {
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(SwathError::InvalidConfig(format!(
                "interval must be a positive distance, got {}",
                self.interval
            )));
        }
        if !self.min_allowable_swath.is_finite() || self.min_allowable_swath < 0.0 {
            return Err(SwathError::InvalidConfig(format!(
                "minimum allowable swath must be non-negative, got {}",
                self.min_allowable_swath
            )));
        }
        Ok(())
    }
}

/// Common error type for swath tracking.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SwathError {
    #[error("cannot find swath minimum without an output side")]
    OutputSideUnset,
    #[error("operation requires a concrete side (port or starboard)")]
    ConcreteSideRequired,
    #[error("swath index {index} out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type SwathResult<T> = Result<T, SwathError>;
