//! Analytics client for the Cloudflare GraphQL API.
//!
//! This module provides the [`AnalyticsClient`] type, which runs the
//! per-status request count query for a zone.

use crate::analytics::errors::FetchError;
use crate::analytics::extract::extract_metrics;
use crate::analytics::query::build_query_body;
use crate::analytics::types::{FetchOptions, StatusMetric};
use crate::clients::HttpClient;
use crate::config::{ApiToken, ExporterConfig, DEFAULT_ENDPOINT};

/// Client for the zone analytics query.
///
/// Holds the bearer token (inside the transport's default headers) and a
/// reusable [`HttpClient`]. Each [`fetch_metrics`](Self::fetch_metrics) call
/// performs exactly one request.
///
/// # Thread Safety
///
/// `AnalyticsClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use cf_stats_exporter::{AnalyticsClient, ApiToken, FetchOptions};
///
/// let client = AnalyticsClient::new(&ApiToken::new("my-token")?)?;
///
/// let metrics = client
///     .fetch_metrics(&FetchOptions {
///         zone_id: "my-zone".to_string(),
///         start: "2025-12-17T15:00:00Z".to_string(),
///         end: "2025-12-18T15:00:00Z".to_string(),
///         limit: 10,
///     })
///     .await?;
///
/// for metric in metrics {
///     println!("{} -> {}", metric.status, metric.count);
/// }
/// ```
#[derive(Debug)]
pub struct AnalyticsClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify AnalyticsClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AnalyticsClient>();
};

impl AnalyticsClient {
    /// Creates a client for the public Cloudflare endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the HTTP client cannot be created.
    pub fn new(api_token: &ApiToken) -> Result<Self, FetchError> {
        Self::with_endpoint(api_token, DEFAULT_ENDPOINT)
    }

    /// Creates a client for a custom endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the HTTP client cannot be created.
    pub fn with_endpoint(
        api_token: &ApiToken,
        endpoint: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let endpoint = endpoint.into();
        if endpoint != DEFAULT_ENDPOINT {
            tracing::debug!("Analytics client using custom endpoint {}", endpoint);
        }

        let http_client = HttpClient::new(endpoint, api_token)?;
        Ok(Self { http_client })
    }

    /// Creates a client from an [`ExporterConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] if the HTTP client cannot be created.
    pub fn from_config(config: &ExporterConfig) -> Result<Self, FetchError> {
        Self::with_endpoint(config.api_token(), config.endpoint())
    }

    /// Returns the endpoint URL used by this client.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http_client.endpoint()
    }

    /// Fetches request counts grouped by edge response status.
    ///
    /// The query is built before any network activity, so invalid options
    /// never reach the API. Metrics come back in the order the API returned
    /// them (descending count).
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] if:
    /// - The options cannot be turned into a query (`Query`)
    /// - The transport call fails or returns a non-200 status (`Http`)
    /// - The response body cannot be decoded (`Extract`)
    pub async fn fetch_metrics(
        &self,
        options: &FetchOptions,
    ) -> Result<Vec<StatusMetric>, FetchError> {
        let body = build_query_body(options)?;

        let response = self.http_client.post_json(body).await?;
        let metrics = extract_metrics(&response.body)?;

        tracing::debug!(
            zone = %options.zone_id,
            groups = metrics.len(),
            "Fetched status metrics"
        );

        Ok(metrics)
    }
}
