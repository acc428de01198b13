//! File-driven run used by the `tidewin` binary.
//!
//! Reads one or two payload files, summarises them and returns the JSON
//! text. Decode and analysis failures are logged where they happen (here
//! for ingest, in `summary` for analysis) at the level `failure_level`
//! picks. I/O and serialization failures are left for the caller to log.

use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::ingest::iwls;
use crate::logging::{self, Component};
use crate::model::{Sample, TideError};
use crate::summary;

#[derive(Debug)]
pub enum RunError {
    /// An input file could not be read.
    Io(String),
    /// A payload could not be decoded or failed analysis. Already logged.
    Analysis(TideError),
    /// The summary could not be rendered as JSON.
    Serialize(String),
}

impl RunError {
    /// Message the caller still has to log, or `None` if the failure was
    /// logged where it occurred.
    pub fn unlogged_message(&self) -> Option<String> {
        match self {
            RunError::Analysis(_) => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Io(msg) => write!(f, "{}", msg),
            RunError::Analysis(err) => write!(f, "{}", err),
            RunError::Serialize(msg) => write!(f, "Failed to serialize summary: {}", msg),
        }
    }
}

impl std::error::Error for RunError {}

/// Summarises the water levels at `levels_path` and, if given, the high/low
/// predictions at `hilo_path`, returning pretty-printed JSON.
pub fn run(config: &Config, levels_path: &Path, hilo_path: Option<&Path>) -> Result<String, RunError> {
    let levels = read_samples(levels_path)?;
    let hilo = match hilo_path {
        Some(path) => Some(read_samples(path)?),
        None => None,
    };

    logging::info(
        Component::System,
        None,
        &format!(
            "Analysing {} water-level samples at >= {:.2} m",
            levels.len(),
            config.analysis.threshold_m
        ),
    );

    let result = summary::summarize(&levels, hilo.as_deref(), config.analysis.threshold_m)
        .map_err(RunError::Analysis)?;
    result.to_json().map_err(|e| RunError::Serialize(e.to_string()))
}

pub fn read_samples(path: &Path) -> Result<Vec<Sample>, RunError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| RunError::Io(format!("Cannot read {}: {}", path.display(), e)))?;
    iwls::parse_samples(&text).map_err(|e| {
        logging::log_analysis_failure(Component::Ingest, Some(&path.display().to_string()), &e);
        RunError::Analysis(e)
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
