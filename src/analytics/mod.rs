//! Zone analytics over the Cloudflare GraphQL API.
//!
//! # Overview
//!
//! - [`AnalyticsClient`]: runs one analytics query per call
//! - [`FetchOptions`]: zone, time window and limit of a query
//! - [`StatusMetric`]: request count for one edge response status
//! - [`build_query_body`]: builds the JSON request body
//! - [`extract_metrics`]: decodes a response body into metrics
//! - [`FetchError`]: unified error for a fetch
//!
//! The query asks for `httpRequestsAdaptiveGroups` of a single zone, grouped
//! by `edgeResponseStatus` and ordered by descending count.

mod client;
mod errors;
mod extract;
mod query;
mod types;

pub use client::AnalyticsClient;
pub use errors::{ExtractError, FetchError, QueryError};
pub use extract::extract_metrics;
pub use query::{build_query_body, build_query_document};
pub use types::{FetchOptions, StatusMetric};
