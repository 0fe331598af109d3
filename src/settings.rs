//! Game settings
//!
//! Read from a JSON file named by `BOMB_LANES_SETTINGS`; every field is
//! optional and falls back to its default.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::tuning::Tuning;

/// Environment variable holding the settings file path
pub const SETTINGS_ENV: &str = "BOMB_LANES_SETTINGS";

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; `None` seeds from the system time
    pub seed: Option<u64>,
    /// Let the autopilot play
    pub idle_mode: bool,
    /// Frames the headless runner simulates
    pub demo_frames: u64,
    /// Frame rate the headless runner simulates at
    pub demo_fps: u32,
    /// Viewport the pointer coordinates refer to
    pub viewport: (f32, f32),
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            idle_mode: false,
            demo_frames: 60 * 30,
            demo_fps: 60,
            viewport: (crate::consts::WIDTH, crate::consts::HEIGHT),
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named in the environment, or use defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(SETTINGS_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Path::new(&path).display());
                settings
            }
            Err(e) => {
                log::warn!(
                    "Could not read settings from {}: {}; using defaults",
                    Path::new(&path).display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Seed to start the run with
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(time_seed)
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::LaneDistribution;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json(
            r#"{ "seed": 42, "tuning": { "falling_speed": 250.0, "lane_distribution": "Uniform" } }"#,
        )
        .unwrap();
        assert_eq!(settings.seed, Some(42));
        assert!(!settings.idle_mode);
        assert_eq!(settings.tuning.falling_speed, 250.0);
        assert_eq!(settings.tuning.bombs_per_second, 5);
        assert_eq!(settings.tuning.lane_distribution, LaneDistribution::Uniform);
    }

    #[test]
    fn test_invalid_json() {
        let err = Settings::from_json("{ seed: }").unwrap_err();
        assert!(matches!(err, GameError::Settings(_)));
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            seed: Some(7),
            idle_mode: false,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_autopilot_is_opt_in() {
        assert!(!Settings::default().idle_mode);
        let settings = Settings::from_json(r#"{ "idle_mode": true }"#).unwrap();
        assert!(settings.idle_mode);
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::from_file("/nonexistent/bomb-lanes.json").unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
    }

    #[test]
    fn test_resolve_seed() {
        let settings = Settings {
            seed: Some(1),
            ..Default::default()
        };
        assert_eq!(settings.resolve_seed(), 1);
    }
}
