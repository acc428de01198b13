//! Series analysis for the tide window service.
//!
//! Both components are pure functions over caller-owned slices: no I/O,
//! no logging, no shared state. They may be called from any thread.
//!
//! Submodules:
//! - `ordering` - running ascending-timestamp check used by both scans.
//! - `windows`  - threshold-crossing segmentation into swim windows.
//! - `extrema`  - alternating high/low labelling of tide extrema.

pub mod extrema;
pub mod ordering;
pub mod windows;

pub use extrema::classify_extrema;
pub use windows::extract_windows;
