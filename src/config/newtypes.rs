//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::header::HeaderValue;
use std::fmt;

/// A validated Cloudflare API token.
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token, displaying only
/// `ApiToken(*****)` instead of the actual value.
///
/// # Example
///
/// ```rust
/// use cf_stats_exporter::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty and
    /// [`ConfigError::InvalidApiToken`] if it cannot be sent as an
    /// `Authorization` header value.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        if HeaderValue::from_str(&format!("Bearer {token}")).is_err() {
            return Err(ConfigError::InvalidApiToken);
        }
        Ok(Self(token))
    }

    /// Returns the value of the `Authorization` header for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated Cloudflare zone identifier.
///
/// The zone tag is opaque: only emptiness is checked. It is later inserted
/// verbatim into the analytics query.
///
/// # Example
///
/// ```rust
/// use cf_stats_exporter::ZoneId;
///
/// let zone = ZoneId::new("023e105f4ecef8ad9ca31a8372d0c353").unwrap();
/// assert_eq!(zone.to_string(), "023e105f4ecef8ad9ca31a8372d0c353");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZoneId(String);

impl ZoneId {
    /// Creates a new validated zone identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyZoneId`] if the identifier is empty.
    pub fn new(zone_id: impl Into<String>) -> Result<Self, ConfigError> {
        let zone_id = zone_id.into();
        if zone_id.is_empty() {
            return Err(ConfigError::EmptyZoneId);
        }
        Ok(Self(zone_id))
    }
}

impl AsRef<str> for ZoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
