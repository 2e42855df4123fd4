use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::display::OutputFormat;
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fallback log filter when `RUST_LOG` is unset.
    pub log_level: LogLevel,
    pub display: DisplayConfig,
    pub clipboard: ClipboardConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogLevel(pub String);

impl Default for LogLevel {
    fn default() -> Self {
        Self("warn".to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_operation: bool,
    pub format: OutputFormat,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_operation: true,
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy the final primary text to the clipboard when the session ends.
    pub copy_result: bool,
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("deskcalc")
            .join("config.toml")
    }

    /// Load from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        Self::parse(&contents).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level.0, "warn");
        assert!(config.display.show_operation);
        assert!(!config.clipboard.copy_result);
    }

    #[test]
    fn test_partial_file() {
        let config = Config::parse(
            r#"
            log_level = "debug"

            [display]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level.0, "debug");
        assert_eq!(config.display.format, OutputFormat::Json);
        assert!(config.display.show_operation);
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Config::parse(
            r#"
            [display]
            format = "html"
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("deskcalc-missing-config-for-test.toml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_bad_file_reports_path() {
        let path = std::env::temp_dir().join(format!("deskcalc-bad-{}.toml", std::process::id()));
        fs::write(&path, "log_level = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("deskcalc-bad-"));
    }
}
