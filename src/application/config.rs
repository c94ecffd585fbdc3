//! Viewer configuration.

use std::{ffi::OsString, fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::RuleKind;

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "LIFE_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for the viewer and the universe it drives
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Universe width in cells
    pub width: u32,
    /// Universe height in cells
    pub height: u32,
    /// Side of one cell in pixels, excluding the grid line
    pub cell_size: f32,
    /// Generations per second while running
    pub ticks_per_second: f32,
    /// Start playing as soon as the window opens
    pub start_running: bool,
    /// Alive probability used by the Random button
    pub random_density: f64,
    /// Rule the universe starts under: "conway" or "highlife"
    pub rule: RuleKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            cell_size: 10.0,
            ticks_per_second: 60.0,
            start_running: true,
            random_density: 0.3,
            rule: RuleKind::Conway,
        }
    }
}

impl Config {
    /// Load from the file named by `LIFE_CONFIG`, or fall back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Like [`Config::load`], but a bad file is logged and replaced by defaults
    pub fn load_or_default() -> Self {
        Self::from_path_or_default(std::env::var_os(CONFIG_ENV))
    }

    fn from_path_or_default(path: Option<OsString>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        Self::from_file(&path).unwrap_or_else(|err| {
            warn!(%err, path = %Path::new(&path).display(), "using default config");
            Self::default()
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_json(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse JSON; missing fields take their default values
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo() {
        let config = Config::default();
        assert_eq!((config.width, config.height), (64, 64));
        assert_eq!(config.cell_size, 10.0);
        assert!(config.start_running);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = Config::from_json(r#"{ "width": 128, "start_running": false }"#).unwrap();
        assert_eq!(config.width, 128);
        assert_eq!(config.height, 64);
        assert!(!config.start_running);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        assert!(matches!(Config::from_json("{ width: }"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_rule_from_json() {
        let config = Config::from_json(r#"{ "rule": "highlife" }"#).unwrap();
        assert_eq!(config.rule, RuleKind::HighLife);
        assert_eq!(Config::default().rule, RuleKind::Conway);
        assert!(Config::from_json(r#"{ "rule": "seeds" }"#).is_err());
    }

    #[test]
    fn test_bad_path_falls_back_to_defaults() {
        let config = Config::from_path_or_default(Some("/nonexistent/life.json".into()));
        assert_eq!(config, Config::default());
        assert_eq!(Config::from_path_or_default(None), Config::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Config::from_file("/nonexistent/life.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
