//! Representative water-level payloads for tests.
//!
//! Shapes follow the prediction service's `/stations/{id}/data` response:
//! a bare JSON array of events, five minutes apart for water levels and
//! irregular for high/low predictions.

/// Morning high tide crossing 2.25 m between 06:10 and 06:25 UTC.
pub const WATER_LEVEL_MORNING_HIGH: &str = r#"[
  {"eventDate":"2024-07-14T06:00:00Z","qcFlagCode":"2","value":2.12,"timeSeriesId":"5d9dd7cc33a9f593161c3ffc"},
  {"eventDate":"2024-07-14T06:05:00Z","qcFlagCode":"2","value":2.21,"timeSeriesId":"5d9dd7cc33a9f593161c3ffc"},
  {"eventDate":"2024-07-14T06:10:00Z","qcFlagCode":"2","value":2.27,"timeSeriesId":"5d9dd7cc33a9f593161c3ffc"},
  {"eventDate":"2024-07-14T06:15:00Z","qcFlagCode":"2","value":2.30,"timeSeriesId":"5d9dd7cc33a9f593161c3ffc"},
  {"eventDate":"2024-07-14T06:20:00Z","qcFlagCode":"2","value":2.26,"timeSeriesId":"5d9dd7cc33a9f593161c3ffc"},
  {"eventDate":"2024-07-14T06:25:00Z","qcFlagCode":"2","value":2.19,"timeSeriesId":"5d9dd7cc33a9f593161c3ffc"},
  {"eventDate":"2024-07-14T06:30:00Z","qcFlagCode":"2","value":2.08,"timeSeriesId":"5d9dd7cc33a9f593161c3ffc"}
]"#;

/// Four turning points starting on a low tide.
pub const HILO_LOW_FIRST: &str = r#"[
  {"eventDate":"2024-07-14T00:41:00Z","qcFlagCode":"2","value":0.62,"timeSeriesId":"5d9dd7cc33a9f593161c3ffd"},
  {"eventDate":"2024-07-14T06:17:00Z","qcFlagCode":"2","value":2.31,"timeSeriesId":"5d9dd7cc33a9f593161c3ffd"},
  {"eventDate":"2024-07-14T12:58:00Z","qcFlagCode":"2","value":1.47,"timeSeriesId":"5d9dd7cc33a9f593161c3ffd"},
  {"eventDate":"2024-07-14T19:02:00Z","qcFlagCode":"2","value":2.88,"timeSeriesId":"5d9dd7cc33a9f593161c3ffd"}
]"#;

/// No data published yet for the requested range.
pub const EMPTY_RESPONSE: &str = "[]";

/// Error object returned instead of an array for an unknown station.
pub const ERROR_OBJECT: &str = r#"{"status":404,"message":"Station not found"}"#;
