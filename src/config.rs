//! Configuration for the command-line tool
//!
//! Config files are YAML by default; a `.json` extension switches to JSON.
//! Every field has a default, so an empty file is a valid config.
//!
//! ```yaml
//! log:
//!   level: debug
//!   format: json
//! output: pretty
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::types::{LogFormat, LogLevel, OutputFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub log: LogConfig,

    /// Default rendering of command results
    #[serde(default)]
    pub output: OutputFormat,
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Ok(serde_json::from_str(&content)?)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Parse configuration from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log.level, LogLevel::Info);
        assert_eq!(config.log.format, LogFormat::Text);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(Config::from_yaml_str("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml_str("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_yaml() {
        let config = Config::from_yaml_str("log:\n  level: debug\n").unwrap();
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.format, LogFormat::Text);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = Config::from_yaml_str("log:\n  level: loud\n").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "log:\n  level: warn\n  format: json\noutput: pretty").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.log.level, LogLevel::Warn);
        assert_eq!(config.log.format, LogFormat::Json);
        assert_eq!(config.output, OutputFormat::Pretty);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"output": "pretty"}}"#).unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.output, OutputFormat::Pretty);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/nonexistent/pagekit.yaml").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_unreadable_path_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::from_file(dir.path()).unwrap_err();

        assert!(matches!(err, Error::Context { .. }));
        let expected = format!("reading {}: IO error:", dir.path().display());
        assert!(err.to_string().starts_with(&expected), "got: {err}");
    }
}
