//! Service configuration.
//!
//! Read from a TOML file whose path comes from `TIDEWIN_CONFIG` (a `.env`
//! file in the working directory is honoured), falling back to
//! `tidewin.toml`. A missing file is not an error; every field has a
//! default.
//!
//! ```toml
//! [analysis]
//! threshold_m = 2.25
//!
//! [logging]
//! level = "info"
//! file = "tidewin.log"
//! console_timestamps = false
//! ```

use serde::Deserialize;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::logging::LogLevel;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "TIDEWIN_CONFIG";

/// Used when `TIDEWIN_CONFIG` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "tidewin.toml";

/// Minimum swimmable water level in metres.
pub const DEFAULT_THRESHOLD_M: f64 = 2.25;

// ---------------------------------------------------------------------------
// Config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Inclusive lower bound for a swim window.
    pub threshold_m: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { threshold_m: DEFAULT_THRESHOLD_M }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub console_timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            console_timestamps: false,
        }
    }
}

impl LoggingConfig {
    pub fn min_level(&self) -> Result<LogLevel, ConfigError> {
        self.level.parse().map_err(ConfigError::Invalid)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The file exists but could not be read.
    Io(String),
    /// The file is not valid TOML or has wrong field types.
    Parse(String),
    /// Parsed fine but a value is out of range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl Config {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads from `path`, returning defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_toml_str(&text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::Io(format!("{}: {}", path.display(), e))),
        }
    }

    /// Loads from the path named by the environment (after reading `.env`).
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::load_from(&config_path())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.analysis.threshold_m.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "analysis.threshold_m must be finite, got {}",
                self.analysis.threshold_m
            )));
        }
        self.logging.min_level()?;
        Ok(())
    }
}

/// `TIDEWIN_CONFIG` if set and non-empty, else `DEFAULT_CONFIG_PATH`.
pub fn config_path() -> PathBuf {
    resolve_config_path(std::env::var(CONFIG_ENV_VAR).ok())
}

fn resolve_config_path(env_value: Option<String>) -> PathBuf {
    match env_value {
        Some(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => PathBuf::from(DEFAULT_CONFIG_PATH),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
