use crate::generator::template::sampled_track;
use anyhow::{bail, Context};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use swathcore::SwathRecord;

const MAX_SAMPLES_PER_LINE: usize = 10_000_000;

/// Configuration for generating a synthetic lawnmower survey.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub lines: usize,
    pub line_length: f64,
    pub line_spacing: f64,
    pub sample_spacing: f64,
    pub swath_width: f64,
    pub width_jitter: f64,
    pub heading_noise: f64,
    /// Degrees per unit travelled, positive to starboard.
    pub turn_rate: f64,
    pub depth: f64,
    pub seed: u64,
    pub description: Option<String>,
    pub scenario: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            lines: 4,
            line_length: 200.0,
            line_spacing: 40.0,
            sample_spacing: 0.5,
            swath_width: 25.0,
            width_jitter: 3.0,
            heading_noise: 1.0,
            turn_rate: 0.0,
            depth: 12.0,
            seed: 0,
            description: None,
            scenario: None,
        }
    }
}

impl GeneratorConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading survey config {}", path_ref.display()))?;
        let config: GeneratorConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing survey config {}", path_ref.display()))?;
        Ok(config)
    }

    fn normalized_lines(&self) -> usize {
        self.lines.max(1)
    }
}

/// One synthetic survey line of raw swath measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyLine {
    pub index: usize,
    pub records: Vec<SwathRecord>,
}

fn jitter(rng: &mut StdRng, amplitude: f64) -> f64 {
    if amplitude > 0.0 {
        rng.gen_range(-amplitude..amplitude)
    } else {
        0.0
    }
}

fn build_line(config: &GeneratorConfig, index: usize, rng: &mut StdRng) -> SurveyLine {
    let x = index as f64 * config.line_spacing;
    let (start_y, heading) = if index % 2 == 0 {
        (0.0, 0.0)
    } else {
        (config.line_length, 180.0)
    };

    let records = sampled_track(
        x,
        start_y,
        heading,
        config.line_length,
        config.sample_spacing,
        config.turn_rate,
    )
    .into_iter()
    .map(|pose| {
        let stbd = (config.swath_width + jitter(rng, config.width_jitter)).max(0.0);
        let port = (config.swath_width + jitter(rng, config.width_jitter)).max(0.0);
        let heading = (pose.heading + jitter(rng, config.heading_noise)).rem_euclid(360.0);
        SwathRecord::new(pose.x, pose.y, heading, stbd, port, config.depth)
    })
    .collect();

    SurveyLine { index, records }
}

pub fn build_survey_from_config(config: &GeneratorConfig) -> anyhow::Result<Vec<SurveyLine>> {
    if !(config.sample_spacing > 0.0) {
        bail!(
            "sample spacing must be positive, got {}",
            config.sample_spacing
        );
    }
    if !(config.line_length >= 0.0) {
        bail!("line length must be non-negative, got {}", config.line_length);
    }
    let samples = (config.line_length / config.sample_spacing).floor();
    if samples >= MAX_SAMPLES_PER_LINE as f64 {
        bail!("survey line would hold {} samples", samples);
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let lines = (0..config.normalized_lines())
        .map(|index| build_line(config, index, &mut rng))
        .collect();
    Ok(lines)
}

pub fn build_survey(lines: usize, line_length: f64) -> anyhow::Result<Vec<SurveyLine>> {
    let config = GeneratorConfig {
        lines,
        line_length,
        ..Default::default()
    };
    build_survey_from_config(&config)
}
