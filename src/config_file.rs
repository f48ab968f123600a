//! Configuration file handling for the calculator.
//!
//! Every field has a default, so an empty JSON object is a valid config. The
//! flight-equivalence divisor is a fixed constant and not configurable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Calculator configuration that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// How long feedback messages stay on screen
    pub notice_duration_ms: u64,
    /// Event poll interval of the TUI loop
    pub tick_rate_ms: u64,
    /// Tracing filter directive, e.g. `info` or `laptop_co2=debug`
    pub log_level: String,
    /// Where the TUI writes its log; no logging in TUI mode when unset
    pub log_file: Option<PathBuf>,
    /// Show the "about this calculator" panel
    pub show_about: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            notice_duration_ms: 3000,
            tick_rate_ms: 50,
            log_level: "info".to_string(),
            log_file: None,
            show_about: true,
        }
    }
}

impl CalculatorConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize configuration to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write configuration to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read configuration from {:?}", path.as_ref()))?;

        let config: Self =
            serde_json::from_str(&content).context("Failed to parse configuration JSON")?;

        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults. The result is validated.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(1..=60_000).contains(&self.notice_duration_ms) {
            anyhow::bail!("notice_duration_ms must be between 1 and 60000");
        }

        if !(10..=1000).contains(&self.tick_rate_ms) {
            anyhow::bail!("tick_rate_ms must be between 10 and 1000");
        }

        EnvFilter::try_new(&self.log_level)
            .with_context(|| format!("Invalid log_level '{}'", self.log_level))?;

        if let Some(log_file) = &self.log_file {
            if log_file.as_os_str().is_empty() {
                anyhow::bail!("log_file must not be empty when set");
            }
        }

        Ok(())
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_valid() {
        let config = CalculatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.notice_duration(), Duration::from_secs(3));
        assert_eq!(config.tick_rate(), Duration::from_millis(50));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let config = CalculatorConfig {
            notice_duration_ms: 1500,
            log_file: Some(dir.path().join("calc.log")),
            ..Default::default()
        };
        config.save_to_file(&path).unwrap();

        let loaded = CalculatorConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.json");
        fs::write(&path, r#"{ "tick_rate_ms": 100 }"#).unwrap();

        let loaded = CalculatorConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(loaded.tick_rate_ms, 100);
        assert_eq!(loaded.notice_duration_ms, 3000);
        assert!(loaded.show_about);
    }

    #[test]
    fn test_validation_rejects_out_of_range() {
        let config = CalculatorConfig {
            notice_duration_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = CalculatorConfig {
            tick_rate_ms: 5000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_log_level() {
        let config = CalculatorConfig {
            log_level: "laptop_co2=loud".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = CalculatorConfig::load_from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration"));
    }
}
