/// Daily tide summary
///
/// Runs both analysis components over already-parsed series and packages
/// the results for the downstream formatter. Timestamps stay in UTC; local
/// time rendering and delivery happen elsewhere.

use serde::Serialize;

use crate::analysis::{classify_extrema, extract_windows};
use crate::logging::{self, Component};
use crate::model::{Sample, SwimWindow, TideError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TideSummary {
    pub threshold_m: f64,
    pub windows: Vec<SwimWindow>,
    pub highs: Vec<Sample>,
    pub lows: Vec<Sample>,
}

impl TideSummary {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds a summary from a water-level series and, optionally, its high/low
/// predictions.
///
/// The two series are analysed independently. The first failure is logged
/// and returned; no partial summary is produced.
pub fn summarize(
    levels: &[Sample],
    extrema: Option<&[Sample]>,
    threshold_m: f64,
) -> Result<TideSummary, TideError> {
    let windows = extract_windows(levels, threshold_m).inspect_err(|e| {
        logging::log_analysis_failure(Component::Windows, None, e);
    })?;

    if levels.is_empty() {
        logging::warn(Component::Windows, None, "No water-level samples for the requested range");
    }
    logging::debug(
        Component::Windows,
        None,
        &format!(
            "{} samples → {} window(s) at >= {:.2} m",
            levels.len(),
            windows.len(),
            threshold_m
        ),
    );

    let (highs, lows) = match extrema {
        Some(points) => {
            let classified = classify_extrema(points).inspect_err(|e| {
                logging::log_analysis_failure(Component::Extrema, None, e);
            })?;
            logging::debug(
                Component::Extrema,
                None,
                &format!(
                    "{} extrema → {} high(s), {} low(s), first is {}",
                    points.len(),
                    classified.highs.len(),
                    classified.lows.len(),
                    classified.first_label
                ),
            );
            (classified.highs, classified.lows)
        }
        None => (Vec::new(), Vec::new()),
    };

    Ok(TideSummary { threshold_m, windows, highs, lows })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
