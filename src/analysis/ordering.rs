/// Timestamp ordering guard.
///
/// Upstream guarantees ascending order and nothing here re-sorts. The guard
/// is fed one sample at a time from inside each component's own scan, so
/// checking costs no extra pass.
///
/// Timestamps must be strictly ascending. A repeated timestamp is rejected
/// the same way as a step backwards, otherwise two windows could share a
/// start instant.

use chrono::{DateTime, Utc};

use crate::model::{Sample, TideError};

#[derive(Debug, Default)]
pub struct OrderGuard {
    previous: Option<DateTime<Utc>>,
}

impl OrderGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `sample` as the next element at `index`, failing unless it is
    /// later than the previously observed one.
    pub fn observe(&mut self, index: usize, sample: &Sample) -> Result<(), TideError> {
        if let Some(previous) = self.previous {
            if sample.timestamp <= previous {
                return Err(TideError::OutOfOrder {
                    index,
                    previous,
                    current: sample.timestamp,
                });
            }
        }
        self.previous = Some(sample.timestamp);
        Ok(())
    }
}
