use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use swathcore::{Side, TrackConfig};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub interval: f64,
    #[serde(default)]
    pub output_side: Side,
    #[serde(default)]
    pub min_allowable_swath: f64,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(interval: f64, output_side: Side, min_allowable_swath: f64) -> Self {
        Self {
            interval,
            output_side,
            min_allowable_swath,
        }
    }

    pub fn to_track_config(&self) -> TrackConfig {
        TrackConfig {
            interval: self.interval,
            output_side: self.output_side,
            min_allowable_swath: self.min_allowable_swath,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_produces_track_config() {
        let cfg = WorkflowConfig::from_args(15.0, Side::Port, 2.0);
        let track = cfg.to_track_config();
        assert_eq!(track.interval, 15.0);
        assert_eq!(track.output_side, Side::Port);
        assert_eq!(track.min_allowable_swath, 2.0);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"interval: 7.5\noutput_side: starboard\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.interval, 7.5);
        assert_eq!(cfg.output_side, Side::Starboard);
        assert_eq!(cfg.min_allowable_swath, 0.0);
    }

    #[test]
    fn missing_side_loads_as_unknown() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"interval: 7.5\n").unwrap();
        let path = temp.into_temp_path();
        let cfg = WorkflowConfig::load(&path).unwrap();
        assert_eq!(cfg.output_side, Side::Unknown);
    }
}
