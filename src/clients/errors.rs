//! HTTP-specific error types.
//!
//! - [`HttpStatusError`]: a response with a status other than 200
//! - [`HttpError`]: unified error type for the transport call
//!
//! # Example
//!
//! ```rust,ignore
//! use cf_stats_exporter::clients::HttpError;
//!
//! match client.post_json(body).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Status(e)) => println!("API error {}: {}", e.code, e.body),
//!     Err(HttpError::EmptyBody) => println!("Empty response"),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when the API answers with a status other than 200.
///
/// The raw body is kept for diagnostics; Cloudflare usually explains
/// authentication failures there.
///
/// # Example
///
/// ```rust
/// use cf_stats_exporter::clients::HttpStatusError;
///
/// let error = HttpStatusError {
///     code: 403,
///     body: r#"{"success":false}"#.to_string(),
///     ray_id: None,
/// };
///
/// assert!(error.to_string().contains("403"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP request failed with status {code}: {body}")]
pub struct HttpStatusError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
    /// The `cf-ray` header of the response, if present.
    pub ray_id: Option<String>,
}

/// Unified error type for the transport call.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Connection, DNS, TLS or body read failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-200 response.
    #[error(transparent)]
    Status(#[from] HttpStatusError),

    /// A 200 response without a body.
    #[error("HTTP request returned an empty response body")]
    EmptyBody,
}
