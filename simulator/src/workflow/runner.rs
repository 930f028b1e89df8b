use crate::generator::profile::SurveyLine;
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use swathcore::telemetry::TrackMetrics;
use swathcore::{Side, SwathPoint, SwathRecord, SwathTrack};

/// Decimated output of one survey line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineResult {
    pub line: usize,
    pub input_count: usize,
    pub records: Vec<SwathRecord>,
    pub port_edge: Vec<SwathPoint>,
    pub stbd_edge: Vec<SwathPoint>,
    pub valid: bool,
    pub metrics: TrackMetrics,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkflowResult {
    pub lines: Vec<LineResult>,
}

impl WorkflowResult {
    pub fn input_count(&self) -> usize {
        self.lines.iter().map(|line| line.input_count).sum()
    }

    pub fn retained_count(&self) -> usize {
        self.lines.iter().map(|line| line.records.len()).sum()
    }

    pub fn valid_lines(&self) -> usize {
        self.lines.iter().filter(|line| line.valid).count()
    }
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    /// Decimates every line on a single track, resetting it between lines.
    pub fn execute(&self, survey: &[SurveyLine]) -> anyhow::Result<WorkflowResult> {
        let track_config = self.config.to_track_config();
        let mut track = SwathTrack::from_config(&track_config).context("building swath track")?;

        let mut lines = Vec::with_capacity(survey.len());
        for line in survey {
            for (sample, record) in line.records.iter().enumerate() {
                track
                    .push_record(*record)
                    .with_context(|| format!("line {} sample {}", line.index, sample))?;
            }
            track.save_last();

            let port_edge = track
                .swath_outer_points(Side::Port)
                .context("projecting port edge")?;
            let stbd_edge = track
                .swath_outer_points(Side::Starboard)
                .context("projecting starboard edge")?;

            log::info!(
                "line {}: kept {} of {} records",
                line.index,
                track.records().len(),
                line.records.len()
            );

            lines.push(LineResult {
                line: line.index,
                input_count: line.records.len(),
                records: track.records().to_vec(),
                port_edge,
                stbd_edge,
                valid: track.is_valid(),
                metrics: track.metrics().snapshot(),
            });

            track.metrics().reset();
            track.reset_line();
        }

        Ok(WorkflowResult { lines })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::{build_survey, build_survey_from_config, GeneratorConfig};

    #[test]
    fn runner_executes_workflow() {
        let cfg = WorkflowConfig::from_args(10.0, Side::Starboard, 0.0);
        let runner = Runner::new(cfg);
        let survey = build_survey(2, 100.0).unwrap();
        let result = runner.execute(&survey).unwrap();

        assert_eq!(result.lines.len(), 2);
        assert_eq!(result.input_count(), 2 * 201);
        assert!(result.retained_count() * 5 < result.input_count());
        assert_eq!(result.valid_lines(), 2);
        for line in &result.lines {
            assert_eq!(line.port_edge.len(), line.records.len());
            assert_eq!(line.stbd_edge.len(), line.records.len());
            assert_eq!(line.metrics.accepted, line.input_count);
        }
    }

    #[test]
    fn lines_are_reset_between_runs() {
        let cfg = WorkflowConfig::from_args(10.0, Side::Port, 0.0);
        let runner = Runner::new(cfg);
        let survey = build_survey(2, 100.0).unwrap();
        let result = runner.execute(&survey).unwrap();

        let second = &result.lines[1];
        assert_eq!(second.records[0], survey[1].records[0]);
    }

    #[test]
    fn turning_line_keeps_more_records_on_outer_side() {
        let config = GeneratorConfig {
            lines: 1,
            line_length: 100.0,
            heading_noise: 0.0,
            width_jitter: 0.0,
            turn_rate: -1.0,
            ..Default::default()
        };
        let survey = build_survey_from_config(&config).unwrap();
        let port = Runner::new(WorkflowConfig::from_args(50.0, Side::Port, 0.0))
            .execute(&survey)
            .unwrap();
        let stbd = Runner::new(WorkflowConfig::from_args(50.0, Side::Starboard, 0.0))
            .execute(&survey)
            .unwrap();

        assert!(stbd.lines[0].metrics.turn_overrides > 0);
        assert_eq!(port.lines[0].metrics.turn_overrides, 0);
    }

    #[test]
    fn unknown_side_fails_workflow() {
        let cfg = WorkflowConfig::from_args(10.0, Side::Unknown, 0.0);
        let survey = build_survey(1, 100.0).unwrap();
        let err = Runner::new(cfg).execute(&survey).unwrap_err();
        assert!(err.chain().any(|cause| cause
            .downcast_ref::<swathcore::SwathError>()
            .is_some()));
    }
}
