//! Error types for exporter configuration.
//!
//! This module contains the errors raised while assembling an
//! [`ExporterConfig`](crate::ExporterConfig) from flags and environment.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! missing credential is rejected before any network call is attempted.
//!
//! # Example
//!
//! ```rust
//! use cf_stats_exporter::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building the exporter configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting was not supplied by flag or environment.
    #[error("{name} environment variable is required")]
    MissingRequiredField {
        /// The environment variable that backs the missing setting.
        name: &'static str,
    },

    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Cloudflare API token.")]
    EmptyApiToken,

    /// API token contains characters that cannot appear in an HTTP header.
    #[error("API token contains characters that are not allowed in an HTTP header (e.g., a newline).")]
    InvalidApiToken,

    /// Zone identifier cannot be empty.
    #[error("Zone ID cannot be empty. Please provide the zone tag of a Cloudflare zone.")]
    EmptyZoneId,

    /// The result limit must be positive.
    #[error("Invalid limit {limit}. The limit must be a positive integer.")]
    InvalidLimit {
        /// The rejected limit.
        limit: u32,
    },
}
