pub mod coverage;
pub mod interval_buffer;
pub mod swath_track;

pub use coverage::{CoverageModel, PassThroughCoverage};
pub use interval_buffer::IntervalBuffer;
pub use swath_track::{SwathTrack, TURN_THRESHOLD_DEG};
