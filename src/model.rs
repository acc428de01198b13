/// Sample, SwimWindow, Extrema, TideError
/// core data structures and error handling
///
/// Core data types for the tide window service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no I/O and no analysis logic, only types and small accessors.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Sample types
// ---------------------------------------------------------------------------

/// A single water-level observation.
///
/// `timestamp` is an absolute instant; rendering into a local timezone is
/// the caller's business.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: f64, // metres above chart datum
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// One record of the upstream water-level payload.
///
/// Mirrors the JSON shape returned by the tide prediction service:
/// `{"eventDate": "...", "qcFlagCode": "1", "value": 2.31, "timeSeriesId": "..."}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TideEvent {
    pub event_date: DateTime<Utc>,
    #[serde(default)]
    pub qc_flag_code: String,
    pub value: f64,
    #[serde(default)]
    pub time_series_id: String,
}

impl From<&TideEvent> for Sample {
    fn from(event: &TideEvent) -> Self {
        Sample::new(event.event_date, event.value)
    }
}

// ---------------------------------------------------------------------------
// Derived types
// ---------------------------------------------------------------------------

/// A closed span during which the water level met the threshold.
///
/// `end` is the timestamp of the first sample that dropped back below the
/// threshold, or the last sample of the series if the level never dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwimWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl SwimWindow {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Inclusive on both ends.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtremumLabel {
    High,
    Low,
}

impl std::fmt::Display for ExtremumLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtremumLabel::High => write!(f, "high"),
            ExtremumLabel::Low => write!(f, "low"),
        }
    }
}

/// Highs and lows split out of an alternating extrema series.
///
/// Both lists keep the relative order of the input. `first_label` records
/// which label index 0 received, so the original interleaving can be
/// reconstructed by `labelled`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extrema {
    pub highs: Vec<Sample>,
    pub lows: Vec<Sample>,
    pub first_label: ExtremumLabel,
}

impl Extrema {
    /// Total number of classified samples.
    pub fn len(&self) -> usize {
        self.highs.len() + self.lows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-interleaves highs and lows in input order.
    pub fn labelled(&self) -> Vec<(ExtremumLabel, Sample)> {
        let (first, second, first_label, second_label) = match self.first_label {
            ExtremumLabel::High => (&self.highs, &self.lows, ExtremumLabel::High, ExtremumLabel::Low),
            ExtremumLabel::Low => (&self.lows, &self.highs, ExtremumLabel::Low, ExtremumLabel::High),
        };

        let mut out = Vec::with_capacity(self.len());
        let mut a = first.iter();
        let mut b = second.iter();
        loop {
            match (a.next(), b.next()) {
                (None, None) => break,
                (x, y) => {
                    if let Some(s) = x {
                        out.push((first_label, *s));
                    }
                    if let Some(s) = y {
                        out.push((second_label, *s));
                    }
                }
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised while decoding or analysing a water-level series.
#[derive(Debug, Clone, PartialEq)]
pub enum TideError {
    /// A sample's timestamp does not come after the one before it.
    OutOfOrder {
        index: usize,
        previous: DateTime<Utc>,
        current: DateTime<Utc>,
    },
    /// The extrema classifier needs at least two samples to pick an anchor.
    InsufficientExtrema { count: usize },
    /// The upstream payload could not be deserialized.
    ParseError(String),
}

impl TideError {
    /// True for caller-side precondition failures, as opposed to bad input
    /// payloads.
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            TideError::OutOfOrder { .. } | TideError::InsufficientExtrema { .. }
        )
    }
}

impl std::fmt::Display for TideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TideError::OutOfOrder { index, previous, current } => write!(
                f,
                "Samples not in ascending order at index {}: {} follows {}",
                index,
                current.to_rfc3339(),
                previous.to_rfc3339()
            ),
            TideError::InsufficientExtrema { count } => write!(
                f,
                "Extrema classification needs at least 2 samples, got {}",
                count
            ),
            TideError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for TideError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
