//! GraphQL query construction.
//!
//! The zone id and timestamps are placed inside GraphQL string literals
//! without escaping. A value containing `"` or `\` produces an invalid or
//! altered query; only the outer JSON envelope is escaped.

use crate::analytics::errors::QueryError;
use crate::analytics::types::FetchOptions;

/// Returns the GraphQL document requesting per-status request counts,
/// ordered by descending count.
///
/// # Example
///
/// ```rust
/// use cf_stats_exporter::FetchOptions;
/// use cf_stats_exporter::analytics::build_query_document;
///
/// let document = build_query_document(&FetchOptions {
///     zone_id: "zone".to_string(),
///     start: "2025-12-17T15:00:00Z".to_string(),
///     end: "2025-12-18T15:00:00Z".to_string(),
///     limit: 10,
/// });
/// assert!(document.contains(r#"zoneTag: "zone""#));
/// ```
#[must_use]
pub fn build_query_document(options: &FetchOptions) -> String {
    let FetchOptions {
        zone_id,
        start,
        end,
        limit,
    } = options;

    format!(
        r#"{{ viewer {{ zones(filter: {{zoneTag: "{zone_id}"}}) {{ httpRequestsAdaptiveGroups(limit: {limit}, filter: {{datetime_geq: "{start}", datetime_leq: "{end}"}}, orderBy: [count_DESC]) {{ count dimensions {{ edgeResponseStatus }} }}}}}}}}"#
    )
}

/// Builds the JSON request body `{"query": "<document>"}`.
///
/// # Errors
///
/// Returns [`QueryError::EmptyZoneId`] for an empty zone id and
/// [`QueryError::ZeroLimit`] for a zero limit.
pub fn build_query_body(options: &FetchOptions) -> Result<String, QueryError> {
    if options.zone_id.is_empty() {
        return Err(QueryError::EmptyZoneId);
    }
    if options.limit == 0 {
        return Err(QueryError::ZeroLimit);
    }

    let body = serde_json::json!({ "query": build_query_document(options) });
    Ok(body.to_string())
}
