//! High/low labelling of tide extrema.
//!
//! The input is already a series of alternating turning points supplied by
//! the prediction service. Nothing here detects peaks or troughs; the only
//! decision is which index parity is "high", made once from the first two
//! samples:
//!
//!   value[0] >  value[1]  →  even indices are High, odd are Low
//!   value[0] <= value[1]  →  odd indices are High, even are Low
//!
//! Every later sample is labelled by parity alone. A series that does not
//! actually alternate is mislabelled silently.

use crate::analysis::ordering::OrderGuard;
use crate::model::{Extrema, ExtremumLabel, Sample, TideError};

/// Splits `extrema` into highs and lows by index parity.
///
/// Fails with `InsufficientExtrema` for fewer than two samples and with
/// `OutOfOrder` if timestamps do not strictly ascend.
pub fn classify_extrema(extrema: &[Sample]) -> Result<Extrema, TideError> {
    let first_label = match extrema {
        [first, second, ..] => anchor(first, second),
        _ => return Err(TideError::InsufficientExtrema { count: extrema.len() }),
    };

    let mut highs = Vec::with_capacity(extrema.len() / 2 + 1);
    let mut lows = Vec::with_capacity(extrema.len() / 2 + 1);
    let mut guard = OrderGuard::new();

    for (index, sample) in extrema.iter().enumerate() {
        guard.observe(index, sample)?;
        match label_at(first_label, index) {
            ExtremumLabel::High => highs.push(*sample),
            ExtremumLabel::Low => lows.push(*sample),
        }
    }

    Ok(Extrema { highs, lows, first_label })
}

/// Label for index 0. Strictly greater wins; a tie makes index 0 Low.
fn anchor(first: &Sample, second: &Sample) -> ExtremumLabel {
    if first.value > second.value {
        ExtremumLabel::High
    } else {
        ExtremumLabel::Low
    }
}

fn label_at(first_label: ExtremumLabel, index: usize) -> ExtremumLabel {
    match (first_label, index % 2 == 0) {
        (label, true) => label,
        (ExtremumLabel::High, false) => ExtremumLabel::Low,
        (ExtremumLabel::Low, false) => ExtremumLabel::High,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
