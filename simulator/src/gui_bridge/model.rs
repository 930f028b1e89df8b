use crate::workflow::runner::{LineResult, WorkflowResult};
use serde::{Deserialize, Serialize};

/// Snapshot served to live display clients.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VisualizationModel {
    pub lines: Vec<LineResult>,
    pub input_count: usize,
    pub retained_count: usize,
    pub scenario: Option<String>,
}

impl VisualizationModel {
    pub fn from_result(result: &WorkflowResult, scenario: Option<String>) -> Self {
        Self {
            lines: result.lines.clone(),
            input_count: result.input_count(),
            retained_count: result.retained_count(),
            scenario,
        }
    }
}
