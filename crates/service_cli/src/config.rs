//! CLI configuration management
//!
//! Settings come from, lowest to highest priority: defaults, a TOML file,
//! `ROOTS_*` environment variables and command-line flags.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Config file read when `--config` is not given and the file exists.
pub const DEFAULT_CONFIG_FILE: &str = "roots.toml";

/// Environment variable overriding the log level
pub const ENV_LOG_LEVEL: &str = "ROOTS_LOG_LEVEL";

/// Environment variable overriding the output format
pub const ENV_FORMAT: &str = "ROOTS_FORMAT";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown log level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown output format
    #[error("Invalid output format: {0}. Must be one of: text, json")]
    InvalidFormat(String),

    /// Config file could not be read or parsed
    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels accepted in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How roots are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Header line followed by one root per line
    #[default]
    Text,
    /// Single JSON document
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Apply overrides from a variable lookup (`std::env::var` in production)
    pub fn with_env_lookup<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }

        Ok(self)
    }

    /// Apply `ROOTS_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_env_lookup(|key| std::env::var(key).ok())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
    }
}

/// Command-line settings that feed into [`CliConfig`]
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Output format override
    pub format: Option<OutputFormat>,
    /// Force debug logging
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (explicit path, else [`DEFAULT_CONFIG_FILE`] if present)
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                CliConfig::from_file(default_path)?
            } else {
                CliConfig::default()
            }
        }
    };

    let mut config = config.with_env_lookup(lookup)?;
    config.merge_with_cli(cli);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(LogLevel::Debug.to_string(), "debug");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_toml_deserialization() {
        let config: CliConfig = toml::from_str(
            r#"
            log_level = "debug"
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let config: CliConfig = toml::from_str(r#"format = "json""#).unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_toml_value() {
        let result: Result<CliConfig, _> = toml::from_str(r#"log_level = "loud""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"info\"").unwrap();

        let config = CliConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_from_missing_file() {
        let result = CliConfig::from_file(Path::new("/nonexistent/roots.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_env_override() {
        let config = CliConfig::default()
            .with_env_lookup(env(&[(ENV_LOG_LEVEL, "error"), (ENV_FORMAT, "json")]))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_env_override_invalid() {
        let result = CliConfig::default().with_env_lookup(env(&[(ENV_FORMAT, "xml")]));
        assert!(matches!(result, Err(ConfigError::InvalidFormat(_))));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = CliConfig::default();
        let cli = CliArgs {
            config_file: None,
            format: Some(OutputFormat::Json),
            verbose: true,
        };
        config.merge_with_cli(&cli);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_build_config_priority() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"info\"\nformat = \"json\"").unwrap();

        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            format: Some(OutputFormat::Text),
            verbose: false,
        };
        let config = build_config_with_env(&cli, env(&[(ENV_LOG_LEVEL, "error")])).unwrap();

        // File sets json, CLI wins with text; env wins over file for the level
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.log_level, LogLevel::Error);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidLogLevel("loud".to_string());
        assert!(err.to_string().contains("loud"));
    }
}
