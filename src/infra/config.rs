//! Configuration loading from TOML files
//!
//! Config file is selected via:
//! 1. --config <path> command line argument
//! 2. CONFIG_FILE environment variable
//! 3. Default: config/default.toml

use crate::domain::types::Profile;
use anyhow::Context;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Output format of the static report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Profile selected when the dashboard opens
    #[serde(default)]
    pub default_profile: Profile,
    /// Profile the time impact call-outs compare against
    #[serde(default = "default_reference_profile")]
    pub reference_profile: Profile,
    /// Input poll interval for the dashboard loop
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_reference_profile() -> Profile {
    Profile::Standard
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            default_profile: Profile::default(),
            reference_profile: default_reference_profile(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter directive used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the dashboard (it owns the terminal)
    #[serde(default = "default_log_file")]
    pub file: String,
    /// Emit JSON lines instead of the human format
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/access-journeys.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file: default_log_file(), json: false }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub view: ViewConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    default_profile: Profile,
    reference_profile: Profile,
    tick_rate_ms: u64,
    log_level: String,
    log_file: String,
    log_json: bool,
    report_format: ReportFormat,
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_toml(TomlConfig::default(), "default".to_string())
    }
}

impl Config {
    fn from_toml(toml_config: TomlConfig, config_file: String) -> Self {
        Self {
            default_profile: toml_config.view.default_profile,
            reference_profile: toml_config.view.reference_profile,
            tick_rate_ms: toml_config.view.tick_rate_ms,
            log_level: toml_config.logging.level,
            log_file: toml_config.logging.file,
            log_json: toml_config.logging.json,
            report_format: toml_config.report.format,
            config_file,
        }
    }

    /// Determine config file path from an explicit argument or the environment
    pub fn resolve_config_path(explicit: Option<&str>) -> String {
        if let Some(path) = explicit {
            return path.to_string();
        }

        if let Ok(path) = env::var("CONFIG_FILE") {
            return path;
        }

        DEFAULT_CONFIG_PATH.to_string()
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self::from_toml(toml_config, path.display().to_string()))
    }

    /// Load configuration from a path, falling back to defaults on any error
    ///
    /// Runs before logging is installed, so the warning goes to stderr.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {:#}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Resolve the path, then load with fallback
    pub fn load(explicit: Option<&str>) -> Self {
        Self::load_from_path(Self::resolve_config_path(explicit))
    }

    pub fn default_profile(&self) -> Profile {
        self.default_profile
    }

    pub fn reference_profile(&self) -> Profile {
        self.reference_profile
    }

    pub fn tick_rate_ms(&self) -> u64 {
        self.tick_rate_ms
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn log_file(&self) -> &str {
        &self.log_file
    }

    pub fn log_json(&self) -> bool {
        self.log_json
    }

    pub fn report_format(&self) -> ReportFormat {
        self.report_format
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }

    /// Builder method for tests to set the initial profile
    #[cfg(test)]
    pub fn with_default_profile(mut self, profile: Profile) -> Self {
        self.default_profile = profile;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.default_profile(), Profile::Wheelchair);
        assert_eq!(config.reference_profile(), Profile::Standard);
        assert_eq!(config.tick_rate_ms(), 250);
        assert_eq!(config.log_level(), "info");
        assert_eq!(config.log_file(), "logs/access-journeys.log");
        assert!(!config.log_json());
        assert_eq!(config.report_format(), ReportFormat::Text);
        assert_eq!(config.config_file(), "default");
    }

    #[test]
    fn test_resolve_config_path_explicit() {
        assert_eq!(Config::resolve_config_path(Some("config/demo.toml")), "config/demo.toml");
    }

    #[test]
    fn test_partial_toml_keeps_section_defaults() {
        let toml_config: TomlConfig = toml::from_str(
            r#"
[view]
default_profile = "visuallyImpaired"
"#,
        )
        .unwrap();
        let config = Config::from_toml(toml_config, "inline".to_string());
        assert_eq!(config.default_profile(), Profile::VisuallyImpaired);
        assert_eq!(config.reference_profile(), Profile::Standard);
        assert_eq!(config.tick_rate_ms(), 250);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_unknown_profile_is_a_parse_error() {
        let result: Result<TomlConfig, _> = toml::from_str(
            r#"
[view]
default_profile = "invalid-profile"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_with_default_profile() {
        let config = Config::default().with_default_profile(Profile::Standard);
        assert_eq!(config.default_profile(), Profile::Standard);
    }
}
