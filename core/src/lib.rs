//! Swath decimation core for sonar coverage tracking.
//!
//! Raw swath measurements arrive along a survey line far more densely than
//! is useful for describing the covered area. `SwathTrack` bins them by
//! travelled distance, keeps the narrowest swath of each bin on the output
//! side, and projects the retained records into footprint-edge points.

pub mod math;
pub mod prelude;
pub mod processing;
pub mod survey;
pub mod telemetry;

pub use prelude::{SwathError, SwathResult, TrackConfig};
pub use processing::{CoverageModel, PassThroughCoverage, SwathTrack};
pub use survey::{Side, SwathPoint, SwathRecord};
