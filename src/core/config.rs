//! Tuning configuration for a flight session.
//!
//! Every field has a default matching the classic feel, so a partial (or
//! missing) `~/.flappy/config.json` is fine.

use super::constants::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Physics, scheduling and viewport tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Downward acceleration in px/s².
    pub gravity: f64,
    /// Velocity set by a tap, in px/s (negative = upward).
    pub jump_force: f64,
    /// Time for one pipe traversal at 1x speed, in ms.
    pub base_traversal_ms: f64,
    /// Gap offsets are drawn from `[-range, range)`.
    pub gap_offset_range: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
    /// Fallback filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            base_traversal_ms: BASE_TRAVERSAL_MS,
            gap_offset_range: GAP_OFFSET_RANGE,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            log_level: "info".to_string(),
        }
    }
}

/// Errors from loading or validating a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read config: {0}")]
    Io(#[from] io::Error),

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl FlightConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: FlightConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravity.is_finite() || !self.jump_force.is_finite() {
            return Err(ConfigError::Invalid(
                "gravity and jump_force must be finite".to_string(),
            ));
        }
        if !(self.base_traversal_ms.is_finite() && self.base_traversal_ms > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "base_traversal_ms must be positive, got {}",
                self.base_traversal_ms
            )));
        }
        if !(self.gap_offset_range.is_finite() && self.gap_offset_range >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "gap_offset_range must be non-negative, got {}",
                self.gap_offset_range
            )));
        }
        for (name, value) in [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Pretty-printed JSON, as written by `flappy --write-config`.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = FlightConfig::default();
        assert_eq!(config.gravity, 1000.0);
        assert_eq!(config.jump_force, -500.0);
        assert_eq!(config.base_traversal_ms, 3000.0);
        assert_eq!(config.gap_offset_range, 200.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = FlightConfig::from_json(r#"{ "gravity": 1200.0 }"#).unwrap();
        assert_eq!(config.gravity, 1200.0);
        assert_eq!(config.jump_force, JUMP_FORCE);
        assert_eq!(config.viewport_height, DEFAULT_VIEWPORT_HEIGHT);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = FlightConfig {
            viewport_width: 320.0,
            log_level: "debug".to_string(),
            ..Default::default()
        };
        let parsed = FlightConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = FlightConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_traversal_rejected() {
        let err = FlightConfig::from_json(r#"{ "base_traversal_ms": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_negative_viewport_rejected() {
        let config = FlightConfig {
            viewport_height: -10.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("flappy_config_that_does_not_exist_4821.json");
        let config = FlightConfig::load(&path).unwrap();
        assert_eq!(config, FlightConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("flappy_config_load_test.json");
        fs::write(&path, r#"{ "jump_force": -450.0 }"#).unwrap();
        let config = FlightConfig::load(&path).unwrap();
        assert_eq!(config.jump_force, -450.0);
        let _ = fs::remove_file(&path);
    }
}
