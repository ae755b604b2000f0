//! Configuration file handling
//!
//! Settings live in a TOML file at `<config dir>/freightmap/config.toml`
//! unless a path is given explicitly. Every key is optional; command line
//! flags take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEMPLATE: &str = "Freight-Sample_scope3.xlsx";
pub const DEFAULT_OUTPUT: &str = "processed_data.xlsx";
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// How the field mapping is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Use the compiled-in column names
    #[default]
    Static,
    /// Ask for each template field which client column to use
    Interactive,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Static => write!(f, "static"),
            Mode::Interactive => write!(f, "interactive"),
        }
    }
}

/// Settings read from the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Template workbook whose header defines the output columns
    pub template: PathBuf,
    /// Where the result workbook is written
    pub output: PathBuf,
    pub mode: Mode,
    /// Number of result rows printed after processing (0 disables the preview)
    pub preview_rows: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: PathBuf::from(DEFAULT_TEMPLATE),
            output: PathBuf::from(DEFAULT_OUTPUT),
            mode: Mode::default(),
            preview_rows: DEFAULT_PREVIEW_ROWS,
        }
    }
}

impl Config {
    /// Load from an explicit path, or from the default location.
    /// An explicit path must exist; a missing default file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                let path = default_config_path();
                if path.exists() {
                    Self::load_file(&path)
                } else {
                    log::debug!("No config file at {}, using defaults", path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// `<config dir>/freightmap/config.toml`, falling back to the working directory
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("freightmap")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.template, PathBuf::from("Freight-Sample_scope3.xlsx"));
        assert_eq!(config.output, PathBuf::from("processed_data.xlsx"));
        assert_eq!(config.mode, Mode::Static);
    }

    #[test]
    fn test_parse_all_keys() {
        let config = Config::parse(
            r#"
            template = "templates/scope3.xlsx"
            output = "out/result.xlsx"
            mode = "interactive"
            preview_rows = 0
            "#,
        )
        .unwrap();

        assert_eq!(config.template, PathBuf::from("templates/scope3.xlsx"));
        assert_eq!(config.output, PathBuf::from("out/result.xlsx"));
        assert_eq!(config.mode, Mode::Interactive);
        assert_eq!(config.preview_rows, 0);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Config::parse(r#"mode = "fuzzy""#).is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Config::parse(r#"templat = "x.xlsx""#).is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let missing = std::env::temp_dir().join("freightmap-no-such-config.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }
}
