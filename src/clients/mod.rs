//! HTTP transport for the Cloudflare GraphQL API.
//!
//! # Overview
//!
//! - [`HttpClient`]: posts one JSON document with bearer authentication
//! - [`HttpResponse`]: status code and raw body of a response
//! - [`HttpError`]: network, status and empty-body failures
//!
//! # Example
//!
//! ```rust,ignore
//! use cf_stats_exporter::ApiToken;
//! use cf_stats_exporter::clients::HttpClient;
//!
//! let token = ApiToken::new("my-token")?;
//! let client = HttpClient::new(cf_stats_exporter::config::DEFAULT_ENDPOINT, &token)?;
//! let response = client.post_json(body).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Every failure is returned to the caller after a single attempt.

mod errors;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpStatusError};
pub use http_client::{HttpClient, SDK_VERSION, USER_AGENT_PRODUCT};
pub use http_response::HttpResponse;
