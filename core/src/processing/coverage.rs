use crate::survey::SwathRecord;

/// Consumer of every accepted swath record, in arrival order.
///
/// The returned flag becomes the result of `SwathTrack::add_record`.
pub trait CoverageModel {
    fn add_record(&mut self, record: &SwathRecord) -> bool;
}

/// Coverage model that accepts everything and keeps nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassThroughCoverage;

impl CoverageModel for PassThroughCoverage {
    fn add_record(&mut self, _record: &SwathRecord) -> bool {
        true
    }
}

impl<C: CoverageModel + ?Sized> CoverageModel for Box<C> {
    fn add_record(&mut self, record: &SwathRecord) -> bool {
        (**self).add_record(record)
    }
}
