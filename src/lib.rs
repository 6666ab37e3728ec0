//! # Cloudflare status metrics exporter
//!
//! Queries the Cloudflare GraphQL analytics API for the request counts of a
//! zone grouped by edge response status, and flattens the answer into a list
//! of `(status, count)` pairs.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ExporterConfig`] and [`ExporterConfigBuilder`]
//! - Validated newtypes for the API token and zone id
//! - A single-request HTTP transport in [`clients`]
//! - Query construction and response decoding in [`analytics`]
//! - The command line entry point in [`cli`]
//!
//! ## Quick Start
//!
//! ```rust
//! use cf_stats_exporter::{ApiToken, ExporterConfig, ZoneId};
//!
//! let config = ExporterConfig::builder()
//!     .api_token(ApiToken::new("your-api-token").unwrap())
//!     .zone_id(ZoneId::new("your-zone-id").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.limit(), 10);
//! ```
//!
//! ## Fetching Metrics
//!
//! ```rust,ignore
//! use cf_stats_exporter::AnalyticsClient;
//!
//! let client = AnalyticsClient::from_config(&config)?;
//! let metrics = client.fetch_metrics(&config.fetch_options()).await?;
//! println!("{}", serde_json::to_string(&metrics)?);
//! ```
//!
//! ## Design Principles
//!
//! - **One request per fetch**: no retries, pagination or rate-limit handling
//! - **Fail-fast validation**: credentials are checked before any network call
//! - **Order preserving**: metrics keep the order returned by the API

pub mod analytics;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use config::{ApiToken, ExporterConfig, ExporterConfigBuilder, ZoneId};
pub use error::ConfigError;

pub use analytics::{
    AnalyticsClient, ExtractError, FetchError, FetchOptions, QueryError, StatusMetric,
};
pub use clients::{HttpClient, HttpError, HttpResponse, HttpStatusError};
