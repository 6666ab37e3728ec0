//! HTTP response type for the transport call.

/// A response from the GraphQL endpoint.
///
/// The body is kept as raw text; decoding is left to the caller.
///
/// # Example
///
/// ```rust
/// use cf_stats_exporter::clients::HttpResponse;
///
/// let response = HttpResponse::new(200, r#"{"data":null}"#.to_string(), None);
/// assert!(response.is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Raw response body.
    pub body: String,
    /// The `cf-ray` header, which identifies the request in Cloudflare support tickets.
    pub ray_id: Option<String>,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, body: String, ray_id: Option<String>) -> Self {
        Self { code, body, ray_id }
    }

    /// Returns `true` only for status 200; the API answers every successful
    /// query with 200.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code == 200
    }
}
