//! Error types for analytics fetches.
//!
//! - [`QueryError`]: the fetch options cannot be turned into a query
//! - [`ExtractError`]: the response body is not the expected document
//! - [`FetchError`]: unified error returned by
//!   [`AnalyticsClient::fetch_metrics`](crate::AnalyticsClient::fetch_metrics)
//!
//! # Example
//!
//! ```rust,ignore
//! use cf_stats_exporter::{ExtractError, FetchError, HttpError};
//!
//! match client.fetch_metrics(&options).await {
//!     Ok(metrics) => println!("{} groups", metrics.len()),
//!     Err(FetchError::Http(HttpError::Status(e))) => println!("status {}", e.code),
//!     Err(FetchError::Extract(ExtractError::Parse(e))) => println!("bad JSON: {e}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error returned when a query cannot be built from the fetch options.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The zone identifier is empty.
    #[error("Cannot build query: zone ID is empty")]
    EmptyZoneId,

    /// The limit is zero.
    #[error("Cannot build query: limit must be a positive integer")]
    ZeroLimit,
}

/// Error returned when a response body cannot be turned into metrics.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The body is not valid JSON.
    #[error("Failed to parse response: {0}")]
    Parse(#[source] serde_json::Error),

    /// The API reported GraphQL-level errors.
    #[error("GraphQL errors: {messages}")]
    Graphql {
        /// Error messages joined with `"; "`.
        messages: String,
    },

    /// The JSON is well-formed but a required container is missing or mistyped.
    #[error("Invalid response structure: {reason}")]
    InvalidShape {
        /// What was missing.
        reason: String,
    },
}

/// Unified error type for a metrics fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The query could not be built.
    #[error(transparent)]
    Query(#[from] QueryError),

    /// The transport call failed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response could not be decoded.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}
