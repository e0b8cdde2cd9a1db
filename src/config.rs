//! Engine configuration file support.
//!
//! This module provides utilities for reading labor-policy defaults from TOML
//! configuration files. Deployments that want different thresholds than the
//! built-in defaults (11h rest, 6 consecutive days, 1 weekly rest day, 8h/40h
//! hour caps) ship an `engine.toml`; per-request `ConstraintSet` values still
//! override whatever the file says.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::ConstraintSet;
use crate::error::{EngineError, EngineResult};

/// Engine configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub policy: PolicySettings,
}

/// Labor-policy threshold settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicySettings {
    #[serde(default = "default_rest_hours")]
    pub rest_hours_required: f64,
    #[serde(default = "default_max_consecutive_days")]
    pub max_consecutive_days: u32,
    #[serde(default = "default_weekly_rest_days")]
    pub weekly_rest_days: u32,
    #[serde(default = "default_max_daily_hours")]
    pub max_daily_hours: u32,
    #[serde(default = "default_max_weekly_hours")]
    pub max_weekly_hours: u32,
}

fn default_rest_hours() -> f64 {
    11.0
}

fn default_max_consecutive_days() -> u32 {
    6
}

fn default_weekly_rest_days() -> u32 {
    1
}

fn default_max_daily_hours() -> u32 {
    8
}

fn default_max_weekly_hours() -> u32 {
    40
}

impl Default for PolicySettings {
    fn default() -> Self {
        Self {
            rest_hours_required: default_rest_hours(),
            max_consecutive_days: default_max_consecutive_days(),
            weekly_rest_days: default_weekly_rest_days(),
            max_daily_hours: default_max_daily_hours(),
            max_weekly_hours: default_max_weekly_hours(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            policy: PolicySettings::default(),
        }
    }
}

impl EngineConfig {
    /// Load engine configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            EngineError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: EngineConfig = toml::from_str(&content).map_err(|e| {
            EngineError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load engine configuration from the default locations, falling back to
    /// the built-in defaults when no file exists.
    ///
    /// Searches for `engine.toml` in the current directory, `config/`, and the
    /// parent directory.
    pub fn from_default_location() -> Self {
        let search_paths = vec![
            PathBuf::from("engine.toml"),
            PathBuf::from("config/engine.toml"),
            PathBuf::from("../engine.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                if let Ok(config) = Self::from_file(&path) {
                    return config;
                }
            }
        }

        Self::default()
    }

    /// Build a constraint set carrying this configuration's thresholds.
    ///
    /// All check flags start disabled; callers enable the checks they want,
    /// per-request values override these thresholds.
    pub fn constraint_defaults(&self) -> ConstraintSet {
        ConstraintSet {
            rest_hours_required: self.policy.rest_hours_required,
            max_consecutive_days: self.policy.max_consecutive_days,
            weekly_rest_days: self.policy.weekly_rest_days,
            max_daily_hours: self.policy.max_daily_hours,
            max_weekly_hours: self.policy.max_weekly_hours,
            ..ConstraintSet::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[policy]
rest_hours_required = 9.5
max_consecutive_days = 5
weekly_rest_days = 2
max_daily_hours = 10
max_weekly_hours = 45
"#;

        let config: EngineConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.policy.rest_hours_required, 9.5);
        assert_eq!(config.policy.max_consecutive_days, 5);
        assert_eq!(config.policy.weekly_rest_days, 2);
        assert_eq!(config.policy.max_daily_hours, 10);
        assert_eq!(config.policy.max_weekly_hours, 45);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let toml = r#"
[policy]
max_consecutive_days = 4
"#;

        let config: EngineConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.policy.max_consecutive_days, 4);
        assert_eq!(config.policy.rest_hours_required, 11.0);
        assert_eq!(config.policy.max_weekly_hours, 40);
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config: EngineConfig = toml::from_str("").unwrap();
        assert_eq!(config.policy.rest_hours_required, 11.0);
        assert_eq!(config.policy.max_consecutive_days, 6);
        assert_eq!(config.policy.weekly_rest_days, 1);
    }

    #[test]
    fn test_constraint_defaults_carry_thresholds() {
        let toml = r#"
[policy]
rest_hours_required = 8.0
"#;
        let config: EngineConfig = toml::from_str(toml).unwrap();
        let constraints = config.constraint_defaults();
        assert_eq!(constraints.rest_hours_required, 8.0);
        assert!(!constraints.enforce_rest_hours);
    }
}
