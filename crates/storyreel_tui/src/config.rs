//! Terminal host configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

fn default_frame_rate_ms() -> u64 {
    50
}

/// Terminal host settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// Redraw interval in milliseconds
    #[serde(default = "default_frame_rate_ms")]
    frame_rate_ms: u64,
    /// Log file written while the terminal is in raw mode
    #[serde(default)]
    log_file: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            frame_rate_ms: default_frame_rate_ms(),
            log_file: None,
        }
    }
}

impl TuiConfig {
    /// Redraw interval, never shorter than one millisecond.
    pub fn frame_rate(&self) -> Duration {
        Duration::from_millis(self.frame_rate_ms.max(1))
    }
}
