use crate::error::{Result, SchedulerError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Upper bound on printed decimal places for percentages.
pub const MAX_DECIMALS: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,

    /// Adjustments made while loading; logged once tracing is up.
    #[serde(skip)]
    pub notices: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimal places for moisture and threshold percentages.
    pub decimals: usize,
    pub show_banner: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: 1,
            show_banner: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter when RUST_LOG is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".into(),
        }
    }
}

impl Config {
    /// Load settings from an explicit YAML file, or fall back to defaults.
    ///
    /// There is no implicit search path: without `--config` nothing is read.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let Some(config_path) = config_path else {
            return Ok(Self::default());
        };

        if !config_path.exists() {
            return Err(SchedulerError::Config(format!(
                "Config file not found at {:?}",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(config_path)?;

        Self::from_yaml(&config_str)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| SchedulerError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()
    }

    fn validate(mut self) -> Result<Self> {
        if self.display.decimals > MAX_DECIMALS {
            self.notices.push(format!(
                "display.decimals {} out of range, clamping to {}",
                self.display.decimals, MAX_DECIMALS
            ));
            self.display.decimals = MAX_DECIMALS;
        }

        if self.logging.level.trim().is_empty() {
            return Err(SchedulerError::Config(
                "logging.level must not be empty".into(),
            ));
        }

        Ok(self)
    }

    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    /// Render the defaults as a commented YAML document.
    pub fn default_yaml() -> Result<String> {
        let yaml = serde_yaml::to_string(&Self::default())
            .map_err(|e| SchedulerError::Config(format!("Failed to serialize config: {}", e)))?;

        Ok(format!(
            "# Irrigation Scheduler Configuration\n# Pass with `irrigation-scheduler --config <path>`.\n\n{}",
            yaml
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_path_uses_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.decimals, 1);
        assert!(config.display.show_banner);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = Config::load(Some(Path::new("/nonexistent/irrigation.yaml"))).unwrap_err();
        assert!(matches!(err, SchedulerError::Config(ref msg) if msg.contains("not found")));
    }

    #[test]
    fn unreadable_file_is_io_error() {
        // A directory exists but cannot be read as a file
        let err = Config::load(Some(std::env::temp_dir().as_path())).unwrap_err();
        assert!(matches!(err, SchedulerError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config = Config::from_yaml("display:\n  decimals: 2\n").unwrap();
        assert_eq!(config.display.decimals, 2);
        assert!(config.display.show_banner);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn full_yaml() {
        let yaml = r#"
display:
  decimals: 0
  show_banner: false
logging:
  level: debug
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.display.decimals, 0);
        assert!(!config.display.show_banner);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn decimals_are_clamped() {
        let mut config = Config::from_yaml("display:\n  decimals: 12\n").unwrap();
        assert_eq!(config.display.decimals, MAX_DECIMALS);
        assert_eq!(
            config.take_notices(),
            vec!["display.decimals 12 out of range, clamping to 4".to_string()]
        );
        assert!(config.take_notices().is_empty());
    }

    #[test]
    fn in_range_values_leave_no_notices() {
        let config = Config::from_yaml("display:\n  decimals: 4\n").unwrap();
        assert!(config.notices.is_empty());
        assert!(!Config::default_yaml().unwrap().contains("notices"));
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let err = Config::from_yaml("display: [not, a, map]").unwrap_err();
        assert!(matches!(err, SchedulerError::Config(ref msg) if msg.contains("parse")));

        let err = Config::from_yaml("logging:\n  level: \"\"\n").unwrap_err();
        assert!(matches!(err, SchedulerError::Config(_)));
    }

    #[test]
    fn default_yaml_parses_back() {
        let yaml = Config::default_yaml().unwrap();
        assert!(yaml.starts_with("# Irrigation Scheduler Configuration"));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), Config::default());
    }
}
