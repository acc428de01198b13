/// Water-level payload decoding
///
/// Converts the JSON body returned by the tide prediction service into the
/// `Sample` series consumed by `analysis`. Fetching the body is the caller's
/// job; this module only parses text that is already in hand.
///
/// Payload shape (array, ascending by `eventDate`):
/// ```json
/// [{"eventDate": "2024-07-14T06:00:00Z", "qcFlagCode": "2",
///   "value": 2.12, "timeSeriesId": "5d9dd7cc33a9f593161c3ffc"}, ...]
/// ```
///
/// Order is preserved exactly as received. Ordering violations surface
/// later, during analysis.

use crate::model::{Sample, TideError, TideEvent};

// ============================================================================
// Parsing
// ============================================================================

/// Deserializes a raw payload into events.
///
/// An empty array is a valid response (nothing published for the range yet)
/// and yields an empty `Vec`.
pub fn parse_tide_events(json: &str) -> Result<Vec<TideEvent>, TideError> {
    serde_json::from_str(json).map_err(|e| TideError::ParseError(e.to_string()))
}

/// Drops wire-only fields, keeping timestamp and value.
pub fn events_to_samples(events: &[TideEvent]) -> Vec<Sample> {
    events.iter().map(Sample::from).collect()
}

/// `parse_tide_events` followed by `events_to_samples`.
pub fn parse_samples(json: &str) -> Result<Vec<Sample>, TideError> {
    let events = parse_tide_events(json)?;
    Ok(events_to_samples(&events))
}

// ============================================================================
// Tests
// ============================================================================
