//! Run configuration
//!
//! Small knobs for the headless driver, loadable from a JSON file. Any
//! missing or malformed field falls back to its default rather than
//! aborting a run.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::AGENT_RADIUS;

/// Sandbox run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for spawn placement
    pub seed: u64,
    /// Number of autonomous agents to spawn
    pub agent_count: usize,
    /// Agent body radius (engine units)
    pub agent_radius: f32,
    /// Total ticks the driver runs
    pub ticks: u64,
    /// Refresh and log visibility every N ticks (0 disables)
    pub vision_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0xA6E17,
            agent_count: 3,
            agent_radius: AGENT_RADIUS,
            ticks: 600,
            vision_interval: 30,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("ignoring malformed settings {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("no settings at {} ({e}), using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, settings.seed);
        assert_eq!(back.agent_count, settings.agent_count);
        assert_eq!(back.ticks, settings.ticks);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"agent_count": 7}"#).unwrap();
        assert_eq!(settings.agent_count, 7);
        assert_eq!(settings.ticks, Settings::default().ticks);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = Settings::load_or_default(Path::new("/nonexistent/settings.json"));
        assert_eq!(settings.agent_count, Settings::default().agent_count);
    }
}
