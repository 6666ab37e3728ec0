//! HTTP client for the Cloudflare GraphQL endpoint.
//!
//! This module provides the [`HttpClient`] type, which sends exactly one
//! authenticated POST per call. There is no retry logic.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpStatusError};
use crate::clients::http_response::HttpResponse;
use crate::config::ApiToken;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Product name sent in the `User-Agent` header.
pub const USER_AGENT_PRODUCT: &str = "cf-stats-exporter";

/// HTTP client for posting GraphQL documents.
///
/// The client handles:
/// - Default headers including User-Agent, content type and bearer token
/// - Mapping non-200 statuses and empty bodies to [`HttpError`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// use cf_stats_exporter::ApiToken;
/// use cf_stats_exporter::clients::HttpClient;
///
/// let token = ApiToken::new("my-token")?;
/// let client = HttpClient::new("https://api.cloudflare.com/client/v4/graphql", &token)?;
///
/// let response = client.post_json(r#"{"query":"{ viewer { zones { zoneTag } } }"}"#.to_string()).await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Full endpoint URL.
    endpoint: String,
    /// Headers included in every request.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given endpoint and token.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(endpoint: impl Into<String>, token: &ApiToken) -> Result<Self, HttpError> {
        let user_agent = format!("{USER_AGENT_PRODUCT}/{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Authorization".to_string(), token.bearer());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            default_headers,
        })
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Posts a JSON document to the endpoint and returns the raw response.
    ///
    /// The whole body is read before returning.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - The connection fails or the body cannot be read (`Network`)
    /// - The status is not 200 (`Status`)
    /// - A 200 response has an empty body (`EmptyBody`)
    pub async fn post_json(&self, body: String) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.post(&self.endpoint);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "Sending GraphQL request");
        let res = req_builder.body(body).send().await?;

        let code = res.status().as_u16();
        let ray_id = res
            .headers()
            .get("cf-ray")
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let body_text = res.text().await?;

        tracing::debug!(
            status = code,
            bytes = body_text.len(),
            ray_id = ray_id.as_deref().unwrap_or("-"),
            "Received GraphQL response"
        );

        let response = HttpResponse::new(code, body_text, ray_id);

        if !response.is_ok() {
            return Err(HttpError::Status(HttpStatusError {
                code: response.code,
                body: response.body,
                ray_id: response.ray_id,
            }));
        }

        if response.body.is_empty() {
            return Err(HttpError::EmptyBody);
        }

        Ok(response)
    }
}
