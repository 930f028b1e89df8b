use log::{debug, info, warn};

/// Thin wrapper over the `log` facade that tags every line with its source.
pub struct LogManager {
    source: &'static str,
}

impl LogManager {
    pub fn new(source: &'static str) -> Self {
        Self { source }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.source, message);
    }

    pub fn detail(&self, message: &str) {
        debug!("[{}] {}", self.source, message);
    }

    pub fn warn(&self, message: &str) {
        warn!("[{}] {}", self.source, message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new("swath")
    }
}
