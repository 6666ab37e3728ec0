//! Configuration types for the exporter.
//!
//! # Overview
//!
//! - [`ExporterConfig`]: credentials plus the fetch window, limit and endpoint
//! - [`ExporterConfigBuilder`]: a builder for constructing [`ExporterConfig`] instances
//! - [`ApiToken`]: a validated bearer token with masked debug output
//! - [`ZoneId`]: a validated zone identifier
//!
//! # Example
//!
//! ```rust
//! use cf_stats_exporter::{ApiToken, ExporterConfig, ZoneId};
//!
//! let config = ExporterConfig::builder()
//!     .api_token(ApiToken::new("my-token").unwrap())
//!     .zone_id(ZoneId::new("my-zone").unwrap())
//!     .limit(25)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.limit(), 25);
//! ```

mod newtypes;

pub use newtypes::{ApiToken, ZoneId};

use crate::analytics::FetchOptions;
use crate::error::ConfigError;

/// The Cloudflare GraphQL analytics endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.cloudflare.com/client/v4/graphql";

/// Default start of the fetch window.
pub const DEFAULT_START: &str = "2025-12-17T15:00:00Z";

/// Default end of the fetch window.
pub const DEFAULT_END: &str = "2025-12-18T15:00:00Z";

/// Default number of status groups requested.
pub const DEFAULT_LIMIT: u32 = 10;

/// Configuration for one exporter run.
///
/// # Defaults
///
/// - `start`: [`DEFAULT_START`]
/// - `end`: [`DEFAULT_END`]
/// - `limit`: [`DEFAULT_LIMIT`]
/// - `endpoint`: [`DEFAULT_ENDPOINT`]
///
/// Start and end are passed to the API as given; they are not parsed.
#[derive(Clone, Debug)]
pub struct ExporterConfig {
    api_token: ApiToken,
    zone_id: ZoneId,
    start: String,
    end: String,
    limit: u32,
    endpoint: String,
}

impl ExporterConfig {
    /// Creates a new builder for constructing an `ExporterConfig`.
    #[must_use]
    pub fn builder() -> ExporterConfigBuilder {
        ExporterConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn api_token(&self) -> &ApiToken {
        &self.api_token
    }

    /// Returns the zone identifier.
    #[must_use]
    pub const fn zone_id(&self) -> &ZoneId {
        &self.zone_id
    }

    /// Returns the start of the fetch window.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the end of the fetch window.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Returns the number of groups requested.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns the GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the query parameters for this configuration.
    #[must_use]
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            zone_id: self.zone_id.to_string(),
            start: self.start.clone(),
            end: self.end.clone(),
            limit: self.limit,
        }
    }
}

// Verify ExporterConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ExporterConfig>();
};

/// Builder for constructing [`ExporterConfig`] instances.
///
/// Required fields are `api_token` and `zone_id`.
#[derive(Debug, Default)]
pub struct ExporterConfigBuilder {
    api_token: Option<ApiToken>,
    zone_id: Option<ZoneId>,
    start: Option<String>,
    end: Option<String>,
    limit: Option<u32>,
    endpoint: Option<String>,
}

impl ExporterConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn api_token(mut self, token: ApiToken) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Sets the zone identifier (required).
    #[must_use]
    pub fn zone_id(mut self, zone_id: ZoneId) -> Self {
        self.zone_id = Some(zone_id);
        self
    }

    /// Sets the start of the fetch window.
    #[must_use]
    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Sets the end of the fetch window.
    #[must_use]
    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Sets the number of groups requested.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Overrides the GraphQL endpoint URL.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Builds the [`ExporterConfig`], validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_token` or
    /// `zone_id` are not set, and [`ConfigError::InvalidLimit`] for a zero limit.
    pub fn build(self) -> Result<ExporterConfig, ConfigError> {
        let api_token = self
            .api_token
            .ok_or(ConfigError::MissingRequiredField {
                name: "CF_API_TOKEN",
            })?;
        let zone_id = self
            .zone_id
            .ok_or(ConfigError::MissingRequiredField { name: "CF_ZONE_ID" })?;

        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            return Err(ConfigError::InvalidLimit { limit });
        }

        Ok(ExporterConfig {
            api_token,
            zone_id,
            start: self.start.unwrap_or_else(|| DEFAULT_START.to_string()),
            end: self.end.unwrap_or_else(|| DEFAULT_END.to_string()),
            limit,
            endpoint: self.endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required() -> ExporterConfigBuilder {
        ExporterConfig::builder()
            .api_token(ApiToken::new("token").unwrap())
            .zone_id(ZoneId::new("zone").unwrap())
    }

    #[test]
    fn test_builder_applies_defaults() {
        let config = required().build().unwrap();

        assert_eq!(config.start(), DEFAULT_START);
        assert_eq!(config.end(), DEFAULT_END);
        assert_eq!(config.limit(), DEFAULT_LIMIT);
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_builder_requires_api_token() {
        let result = ExporterConfig::builder()
            .zone_id(ZoneId::new("zone").unwrap())
            .build();

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingRequiredField {
                name: "CF_API_TOKEN"
            }
        );
    }

    #[test]
    fn test_builder_requires_zone_id() {
        let result = ExporterConfig::builder()
            .api_token(ApiToken::new("token").unwrap())
            .build();

        assert_eq!(
            result.unwrap_err(),
            ConfigError::MissingRequiredField { name: "CF_ZONE_ID" }
        );
    }

    #[test]
    fn test_builder_rejects_zero_limit() {
        let result = required().limit(0).build();
        assert_eq!(result.unwrap_err(), ConfigError::InvalidLimit { limit: 0 });
    }

    #[test]
    fn test_fetch_options_carry_overrides() {
        let config = required()
            .start("2026-01-01T00:00:00Z")
            .end("2026-01-02T00:00:00Z")
            .limit(3)
            .build()
            .unwrap();

        let options = config.fetch_options();
        assert_eq!(options.zone_id, "zone");
        assert_eq!(options.start, "2026-01-01T00:00:00Z");
        assert_eq!(options.end, "2026-01-02T00:00:00Z");
        assert_eq!(options.limit, 3);
    }

    #[test]
    fn test_config_debug_masks_token() {
        let config = required().build().unwrap();
        let debug = format!("{config:?}");
        assert!(debug.contains("ApiToken(*****)"));
        assert!(!debug.contains("\"token\""));
    }
}
