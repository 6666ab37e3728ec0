//! Value types shared by the query builder and the response extractor.

use serde::{Deserialize, Serialize};

/// Parameters of one analytics fetch.
///
/// Timestamps are RFC 3339 strings supplied by the caller and passed through
/// unchanged.
///
/// # Example
///
/// ```rust
/// use cf_stats_exporter::FetchOptions;
///
/// let options = FetchOptions {
///     zone_id: "my-zone".to_string(),
///     start: "2025-12-17T15:00:00Z".to_string(),
///     end: "2025-12-18T15:00:00Z".to_string(),
///     limit: 10,
/// };
/// assert_eq!(options.limit, 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Zone tag to filter on.
    pub zone_id: String,
    /// Inclusive start of the window (`datetime_geq`).
    pub start: String,
    /// Inclusive end of the window (`datetime_leq`).
    pub end: String,
    /// Maximum number of status groups to return.
    pub limit: u32,
}

/// Request count for one edge response status.
///
/// Serializes as `{"status": 200, "count": 5}`.
///
/// # Example
///
/// ```rust
/// use cf_stats_exporter::StatusMetric;
///
/// let metric = StatusMetric { status: 404, count: 2 };
/// let json = serde_json::to_string(&metric).unwrap();
/// assert_eq!(json, r#"{"status":404,"count":2}"#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StatusMetric {
    /// HTTP status code returned at the edge.
    pub status: u16,
    /// Number of requests that received this status.
    pub count: u64,
}
