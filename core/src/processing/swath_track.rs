use crate::math::{AngleHelper, StatsHelper};
use crate::prelude::{SwathError, SwathResult, TrackConfig};
use crate::processing::coverage::{CoverageModel, PassThroughCoverage};
use crate::processing::interval_buffer::IntervalBuffer;
use crate::survey::{Side, SwathPoint, SwathRecord};
use crate::telemetry::{LogManager, MetricsRecorder};

/// Heading change (degrees) away from the output side that forces a record
/// into the retained list regardless of distance travelled.
pub const TURN_THRESHOLD_DEG: f64 = 20.0;

/// Decimates one survey line of swath records into boundary records.
///
/// Records are binned by distance travelled. When a bin reaches the
/// configured interval, the record with the narrowest output-side swath is
/// retained, so the retained boundary never claims more coverage than was
/// measured. Sharp turns away from the output side bypass the binning.
pub struct SwathTrack<C: CoverageModel = PassThroughCoverage> {
    min_allowable_swath: f64,
    interval: f64,
    output_side: Side,
    acc_dist: f64,
    previous: Option<SwathRecord>,
    pending: IntervalBuffer,
    retained: Vec<SwathRecord>,
    coverage: C,
    metrics: MetricsRecorder,
    logger: LogManager,
}

impl SwathTrack {
    /// Track with a pass-through coverage model and no output side yet.
    ///
    /// Fails with `InvalidConfig` unless `interval` is a finite positive
    /// distance.
    pub fn new(interval: f64) -> SwathResult<Self> {
        Self::from_config(&TrackConfig {
            interval,
            ..Default::default()
        })
    }

    pub fn from_config(config: &TrackConfig) -> SwathResult<Self> {
        Self::with_coverage(config, PassThroughCoverage)
    }
}

impl<C: CoverageModel> SwathTrack<C> {
    fn build(interval: f64, coverage: C) -> Self {
        Self {
            min_allowable_swath: 0.0,
            interval,
            output_side: Side::Unknown,
            acc_dist: 0.0,
            previous: None,
            pending: IntervalBuffer::new(),
            retained: Vec::new(),
            coverage,
            metrics: MetricsRecorder::new(),
            logger: LogManager::new("swath-track"),
        }
    }

    /// Builds a track from a validated configuration and a coverage model.
    pub fn with_coverage(config: &TrackConfig, coverage: C) -> SwathResult<Self> {
        config.validate()?;
        let mut track = Self::build(config.interval, coverage);
        track.output_side = config.output_side;
        track.min_allowable_swath = config.min_allowable_swath;
        Ok(track)
    }

    pub fn set_output_side(&mut self, side: Side) {
        self.output_side = side;
    }

    pub fn output_side(&self) -> Side {
        self.output_side
    }

    pub fn set_min_allowable_swath(&mut self, width: f64) {
        self.min_allowable_swath = width;
    }

    pub fn min_allowable_swath(&self) -> f64 {
        self.min_allowable_swath
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Adds one measurement to the line.
    ///
    /// Returns `Ok(false)` without touching any state when position and
    /// heading repeat the previous record exactly. Otherwise the record is
    /// buffered and forwarded to the coverage model, whose verdict is
    /// returned. Fails with `OutputSideUnset` before any state change if the
    /// record would trigger decimation while no output side is configured.
    pub fn add_record(
        &mut self,
        swath_stbd: f64,
        swath_port: f64,
        x: f64,
        y: f64,
        heading: f64,
        depth: f64,
    ) -> SwathResult<bool> {
        self.push_record(SwathRecord::new(
            x, y, heading, swath_stbd, swath_port, depth,
        ))
    }

    /// Same as [`SwathTrack::add_record`] for an already-built record.
    pub fn push_record(&mut self, record: SwathRecord) -> SwathResult<bool> {
        if self
            .previous
            .as_ref()
            .is_some_and(|previous| previous.same_pose(&record))
        {
            self.metrics.record_duplicate();
            return Ok(false);
        }

        let step = self
            .previous
            .as_ref()
            .map(|previous| (record.x - previous.x).hypot(record.y - previous.y));
        let acc_dist = self.acc_dist + step.unwrap_or(0.0);
        let interval_reached = step.is_some() && acc_dist >= self.interval;
        if interval_reached && !self.output_side.is_concrete() {
            return Err(SwathError::OutputSideUnset);
        }

        self.check_width(&record);
        self.pending.push(record);

        if step.is_some() {
            self.logger
                .detail(&format!("accumulated distance {:.3}", acc_dist));
            if interval_reached {
                self.acc_dist = 0.0;
                self.min_interval()?;
            } else {
                self.acc_dist = acc_dist;
                if self.is_outward_turn(&record) {
                    self.logger.detail(&format!(
                        "turn at ({:.2}, {:.2}) heading {:.1}, keeping record",
                        record.x, record.y, record.heading
                    ));
                    self.retained.push(record);
                    self.pending.clear();
                    self.metrics.record_turn_override();
                }
            }
        }

        self.previous = Some(record);
        self.metrics.record_accepted();

        Ok(self.coverage.add_record(&record))
    }

    fn check_width(&self, record: &SwathRecord) {
        if self.min_allowable_swath <= 0.0 {
            return;
        }
        if let Some(width) = record.width(self.output_side) {
            if width < self.min_allowable_swath {
                self.logger.warn(&format!(
                    "{} swath {:.2} at ({:.2}, {:.2}) below minimum {:.2}",
                    self.output_side, width, record.x, record.y, self.min_allowable_swath
                ));
                self.metrics.record_narrow_swath();
            }
        }
    }

    /// Turn relative to the last retained record that swings away from the
    /// output side.
    fn is_outward_turn(&self, record: &SwathRecord) -> bool {
        let Some(last) = self.retained.last() else {
            return false;
        };
        let turn = AngleHelper::wrap_to_180(
            AngleHelper::wrap_to_180(record.heading) - AngleHelper::wrap_to_180(last.heading),
        );
        match self.output_side {
            Side::Port => turn > TURN_THRESHOLD_DEG,
            Side::Starboard => turn < -TURN_THRESHOLD_DEG,
            Side::Unknown => false,
        }
    }

    /// Retains the narrowest output-side record of the current interval.
    fn min_interval(&mut self) -> SwathResult<()> {
        let widths = self
            .pending
            .widths(self.output_side)
            .ok_or(SwathError::OutputSideUnset)?;
        let min_index = StatsHelper::argmin(widths);

        if let Some(&selected) = self.pending.get(min_index) {
            if self.retained.is_empty() && min_index != 0 {
                if let Some(&first) = self.pending.first() {
                    self.logger.detail("saving first record of line");
                    self.retained.push(first);
                    self.metrics.record_line_start_anchor();
                }
            }
            self.retained.push(selected);
        }

        self.pending.clear();
        self.metrics.record_decimation();
        Ok(())
    }

    /// Retains the last buffered record if it sits somewhere new.
    ///
    /// Returns whether both the retained list and the interval buffer held
    /// records, whether or not anything was appended.
    pub fn save_last(&mut self) -> bool {
        let last = match (self.retained.last(), self.pending.last()) {
            (Some(kept), Some(raw)) => {
                if kept.x == raw.x && kept.y == raw.y {
                    return true;
                }
                *raw
            }
            _ => return false,
        };

        self.logger.record(&format!(
            "saving last record of line ({:.2}, {:.2})",
            last.x, last.y
        ));
        self.retained.push(last);
        self.metrics.record_line_end_save();
        true
    }

    /// Starts a new survey line. Interval, output side and the coverage model
    /// are kept.
    pub fn reset_line(&mut self) {
        self.logger.record(&format!(
            "resetting line with {} retained records",
            self.retained.len()
        ));
        self.pending.clear();
        self.retained.clear();
        self.acc_dist = 0.0;
        self.previous = None;
    }

    pub fn outer_point(&self, record: &SwathRecord, side: Side) -> SwathResult<SwathPoint> {
        record.outer_point(side)
    }

    /// Outer points of every retained record, in line order.
    pub fn swath_outer_points(&self, side: Side) -> SwathResult<Vec<SwathPoint>> {
        self.retained
            .iter()
            .map(|record| record.outer_point(side))
            .collect()
    }

    /// (port, starboard) outer points of the most recent record, retained
    /// or not.
    pub fn last_outer_points(&self) -> Option<(SwathPoint, SwathPoint)> {
        let previous = self.previous.as_ref()?;
        let port = previous.outer_point(Side::Port).ok()?;
        let stbd = previous.outer_point(Side::Starboard).ok()?;
        Some((port, stbd))
    }

    /// Width of a retained record, or 0 when `index` is out of range or the
    /// side is unknown. A zero here is indistinguishable from a zero-width
    /// swath; use [`SwathTrack::swath_width_checked`] to tell them apart.
    pub fn swath_width(&self, side: Side, index: usize) -> f64 {
        self.swath_width_checked(side, index).unwrap_or(0.0)
    }

    pub fn swath_width_checked(&self, side: Side, index: usize) -> Option<f64> {
        self.retained.get(index)?.width(side)
    }

    pub fn all_swath_widths(&self, side: Side) -> Vec<f64> {
        self.retained
            .iter()
            .filter_map(|record| record.width(side))
            .collect()
    }

    pub fn swath_location(&self, index: usize) -> SwathResult<SwathPoint> {
        self.retained
            .get(index)
            .map(SwathRecord::location)
            .ok_or(SwathError::IndexOutOfRange {
                index,
                len: self.retained.len(),
            })
    }

    /// A line needs at least two boundary records to form an edge.
    pub fn is_valid(&self) -> bool {
        self.retained.len() > 1
    }

    pub fn records(&self) -> &[SwathRecord] {
        &self.retained
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn accumulated_distance(&self) -> f64 {
        self.acc_dist
    }

    pub fn has_records(&self) -> bool {
        self.previous.is_some()
    }

    pub fn previous_record(&self) -> Option<&SwathRecord> {
        self.previous.as_ref()
    }

    pub fn metrics(&self) -> &MetricsRecorder {
        &self.metrics
    }

    pub fn coverage(&self) -> &C {
        &self.coverage
    }
}
