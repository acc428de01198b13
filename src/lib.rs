//! tidewin_service: swim windows and high/low tides for a single station.
//!
//! # Module structure
//!
//! ```text
//! tidewin_service
//! ├── model       - shared data types (Sample, SwimWindow, Extrema, TideError, …)
//! ├── analysis
//! │   ├── ordering - ascending-timestamp guard
//! │   ├── windows  - threshold-crossing segmentation
//! │   └── extrema  - alternating high/low labelling
//! ├── ingest
//! │   ├── iwls    - upstream JSON payload → Sample series
//! │   └── fixtures (test only) - representative payloads
//! ├── summary     - runs both analyses, serializable result
//! ├── runner      - file-driven run behind the binary
//! ├── config      - TOML configuration
//! └── logging     - structured console/file logging
//! ```

pub mod analysis;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod runner;
pub mod summary;
