//! Swim window extraction.
//!
//! Segments an ascending water-level series into maximal runs where
//! `value >= threshold`. A window opens at the first qualifying sample and
//! closes at the timestamp of the first sample that drops back below the
//! threshold, so the reported end is the crossing sample rather than the
//! last qualifying one.
//!
//! If the series ends while a window is still open, the window is closed at
//! the last sample's timestamp. No crossing is extrapolated past the data.

use chrono::{DateTime, Utc};

use crate::analysis::ordering::OrderGuard;
use crate::model::{Sample, SwimWindow, TideError};

/// Scan state: either between windows or inside one that opened at `start`.
#[derive(Debug, Clone, Copy)]
enum WindowState {
    Idle,
    Open { start: DateTime<Utc> },
}

/// Returns every window where the level is at or above `threshold`, in
/// start order.
///
/// An empty series yields no windows. A timestamp that does not advance
/// yields `TideError::OutOfOrder`. A `NaN` value never qualifies.
pub fn extract_windows(samples: &[Sample], threshold: f64) -> Result<Vec<SwimWindow>, TideError> {
    let mut windows = Vec::new();
    let mut state = WindowState::Idle;
    let mut guard = OrderGuard::new();

    for (index, sample) in samples.iter().enumerate() {
        guard.observe(index, sample)?;
        let qualifies = sample.value >= threshold;

        state = match (state, qualifies) {
            (WindowState::Idle, true) => WindowState::Open { start: sample.timestamp },
            (WindowState::Open { start }, false) => {
                windows.push(SwimWindow { start, end: sample.timestamp });
                WindowState::Idle
            }
            (unchanged, _) => unchanged,
        };
    }

    if let (WindowState::Open { start }, Some(last)) = (state, samples.last()) {
        windows.push(SwimWindow { start, end: last.timestamp });
    }

    Ok(windows)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    const THRESHOLD: f64 = 2.25;

    /// Midnight UTC on a fixed day; samples are spaced five minutes apart.
    fn t(step: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 14, 0, 0, 0).unwrap() + Duration::minutes(5 * step)
    }

    fn series(values: &[f64]) -> Vec<Sample> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Sample::new(t(i as i64), *v))
            .collect()
    }

    // --- Boundaries ---------------------------------------------------------

    #[test]
    fn test_empty_series_yields_no_windows() {
        for threshold in [THRESHOLD, 0.0, -5.0, f64::INFINITY] {
            let windows = extract_windows(&[], threshold).expect("empty input is not an error");
            assert!(windows.is_empty(), "threshold {} produced {:?}", threshold, windows);
        }
    }

    #[test]
    fn test_all_above_yields_single_window_to_last_sample() {
        let windows = extract_windows(&series(&[3.0, 3.0, 3.0]), THRESHOLD).unwrap();
        assert_eq!(windows, vec![SwimWindow { start: t(0), end: t(2) }]);
    }

    #[test]
    fn test_all_below_yields_no_windows() {
        let windows = extract_windows(&series(&[1.0, 2.0, 2.24, 0.5]), THRESHOLD).unwrap();
        assert!(windows.is_empty());
    }

    // --- Crossing semantics -------------------------------------------------

    #[test]
    fn test_window_closes_at_first_sample_below_threshold() {
        let windows = extract_windows(&series(&[1.0, 1.0, 3.0, 1.0]), THRESHOLD).unwrap();
        assert_eq!(
            windows,
            vec![SwimWindow { start: t(2), end: t(3) }],
            "end should be the crossing sample, not the last qualifying one"
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let windows = extract_windows(&series(&[2.0, 2.25, 2.0]), THRESHOLD).unwrap();
        assert_eq!(windows, vec![SwimWindow { start: t(1), end: t(2) }]);
    }

    #[test]
    fn test_single_trailing_qualifying_sample_has_zero_length() {
        let windows = extract_windows(&series(&[1.0, 1.0, 2.5]), THRESHOLD).unwrap();
        assert_eq!(windows, vec![SwimWindow { start: t(2), end: t(2) }]);
        assert_eq!(windows[0].duration(), Duration::zero());
    }

    #[test]
    fn test_two_tides_produce_two_ordered_windows() {
        // Two high tides with a trough between, second still rising at end of day.
        let levels = [1.2, 2.3, 2.9, 2.4, 1.9, 1.1, 1.6, 2.25, 2.8];
        let windows = extract_windows(&series(&levels), THRESHOLD).unwrap();
        assert_eq!(
            windows,
            vec![
                SwimWindow { start: t(1), end: t(4) },
                SwimWindow { start: t(7), end: t(8) },
            ]
        );
        for pair in windows.windows(2) {
            assert!(pair[0].start < pair[1].start);
            assert!(pair[0].end <= pair[1].start, "windows must not overlap: {:?}", pair);
        }
    }

    #[test]
    fn test_nan_values_never_qualify() {
        let windows = extract_windows(&series(&[3.0, f64::NAN, 3.0]), THRESHOLD).unwrap();
        assert_eq!(
            windows,
            vec![
                SwimWindow { start: t(0), end: t(1) },
                SwimWindow { start: t(2), end: t(2) },
            ]
        );
    }

    // --- Properties ---------------------------------------------------------

    #[test]
    fn test_every_qualifying_sample_is_covered_and_no_other_starts_a_window() {
        let levels = [0.4, 2.6, 2.7, 1.0, 2.3, 0.1, 0.2, 3.3, 3.1, 2.0, 2.25];
        let samples = series(&levels);
        let windows = extract_windows(&samples, THRESHOLD).unwrap();
        let last = samples.last().unwrap().timestamp;

        // Ends are exclusive except for a window cut off by the end of data.
        let covered = |ts: DateTime<Utc>| {
            windows
                .iter()
                .any(|w| w.start <= ts && (ts < w.end || (ts == w.end && ts == last)))
        };
        for s in &samples {
            assert_eq!(
                covered(s.timestamp),
                s.value >= THRESHOLD,
                "coverage mismatch for sample {:?}",
                s
            );
        }
        for w in &windows {
            let opener = samples.iter().find(|s| s.timestamp == w.start).unwrap();
            assert!(opener.value >= THRESHOLD, "window opened on non-qualifying sample");
        }
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let samples = series(&[1.0, 2.5, 2.6, 1.0, 2.9]);
        let first = extract_windows(&samples, THRESHOLD).unwrap();
        let second = extract_windows(&samples, THRESHOLD).unwrap();
        assert_eq!(first, second);
    }

    // --- Preconditions ------------------------------------------------------

    #[test]
    fn test_out_of_order_series_is_rejected() {
        let samples = vec![
            Sample::new(t(0), 1.0),
            Sample::new(t(2), 3.0),
            Sample::new(t(1), 3.0),
        ];
        let err = extract_windows(&samples, THRESHOLD).unwrap_err();
        assert!(err.is_precondition_violation());
        assert!(matches!(err, TideError::OutOfOrder { index: 2, .. }), "got {:?}", err);
    }

    #[test]
    fn test_repeated_timestamps_are_rejected() {
        // Accepting these would yield two windows starting at the same instant.
        let samples = vec![
            Sample::new(t(0), 3.0),
            Sample::new(t(0), 1.0),
            Sample::new(t(0), 3.0),
        ];
        let err = extract_windows(&samples, THRESHOLD).unwrap_err();
        assert_eq!(
            err,
            TideError::OutOfOrder { index: 1, previous: t(0), current: t(0) }
        );
    }
}
