//! Simulator configuration with TOML persistence.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::Strategy;
use crate::types::{
    StepperError, StepperResult, VertexId, DEFAULT_AUTOPLAY_PERIOD_MS, DEFAULT_LOG_DISPLAY_LIMIT,
    DEFAULT_SLOT_COUNT,
};

/// Complete simulator configuration. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepperConfig {
    /// Number of save slots
    pub slot_count: usize,

    /// Auto-play step period (milliseconds)
    pub autoplay_period_ms: u64,

    /// Strategy a fresh simulator starts with
    pub default_strategy: Strategy,

    /// Start vertex a fresh simulator starts with
    pub default_start: VertexId,

    /// Where save slots are persisted
    pub slot_file: PathBuf,

    /// How many trace lines front ends show
    pub log_display_limit: usize,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            slot_count: DEFAULT_SLOT_COUNT,
            autoplay_period_ms: DEFAULT_AUTOPLAY_PERIOD_MS,
            default_strategy: Strategy::BreadthFirst,
            default_start: 0,
            slot_file: PathBuf::from("gstep_slots.json"),
            log_display_limit: DEFAULT_LOG_DISPLAY_LIMIT,
        }
    }
}

impl StepperConfig {
    /// Load from TOML file
    pub fn load(path: &Path) -> StepperResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse TOML text
    pub fn from_toml(content: &str) -> StepperResult<Self> {
        toml::from_str(content).map_err(|e| StepperError::Config(e.to_string()))
    }

    /// Save to TOML file
    pub fn save(&self, path: &Path) -> StepperResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| StepperError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> StepperResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// The auto-play period as a Duration.
    pub fn autoplay_period(&self) -> Duration {
        Duration::from_millis(self.autoplay_period_ms)
    }

    /// Auto-play period for a run: an explicit delay wins, `autoplay` falls
    /// back to the configured period, neither means manual stepping.
    pub fn run_period(&self, autoplay: bool, delay_ms: Option<u64>) -> Option<Duration> {
        match delay_ms {
            Some(ms) => Some(Duration::from_millis(ms)),
            None if autoplay => Some(self.autoplay_period()),
            None => None,
        }
    }
}
