//! Upstream payload decoding.
//!
//! Submodules:
//! - `iwls`     - JSON water-level payloads → `Sample` series.
//! - `fixtures` (test only) - representative payloads.

pub mod iwls;

#[cfg(test)]
pub mod fixtures;
