//! Command line entry point.
//!
//! Every setting can be given as a flag or through the environment. The API
//! token and zone id are required; the rest default to the values in
//! [`crate::config`].
//!
//! # Example
//!
//! ```text
//! CF_API_TOKEN=... CF_ZONE_ID=... cf-stats-exporter --limit 5
//! [{"status":200,"count":9120},{"status":404,"count":31}]
//! ```

use std::io::Write;

use clap::Parser;
use thiserror::Error;

use crate::analytics::{AnalyticsClient, FetchError, StatusMetric};
use crate::config::{
    ApiToken, ExporterConfig, ZoneId, DEFAULT_END, DEFAULT_ENDPOINT, DEFAULT_LIMIT, DEFAULT_START,
};
use crate::error::ConfigError;

/// Process exit code on success.
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit code on any failure.
pub const EXIT_FAILURE: u8 = 1;

/// Prints request counts per HTTP status for a Cloudflare zone as JSON.
#[derive(Debug, Clone, Parser)]
#[command(name = "cf-stats-exporter", version, about)]
pub struct Cli {
    /// Cloudflare API token with Analytics read access.
    #[arg(long, env = "CF_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Zone tag to report on.
    #[arg(long, env = "CF_ZONE_ID")]
    pub zone_id: Option<String>,

    /// Start of the window (RFC 3339).
    #[arg(long, env = "CF_START_DATE", default_value = DEFAULT_START)]
    pub start: String,

    /// End of the window (RFC 3339).
    #[arg(long, env = "CF_END_DATE", default_value = DEFAULT_END)]
    pub end: String,

    /// Maximum number of status groups.
    #[arg(long, env = "CF_LIMIT", default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// GraphQL endpoint URL.
    #[arg(long, env = "CF_GRAPHQL_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Indent the JSON output.
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    /// Validates the arguments into an [`ExporterConfig`].
    ///
    /// Empty values count as missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] when the token or zone
    /// id is absent, and [`ConfigError::InvalidLimit`] for a zero limit.
    pub fn to_config(&self) -> Result<ExporterConfig, ConfigError> {
        let api_token = self
            .api_token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingRequiredField {
                name: "CF_API_TOKEN",
            })?;
        let zone_id = self
            .zone_id
            .as_deref()
            .filter(|zone| !zone.is_empty())
            .ok_or(ConfigError::MissingRequiredField { name: "CF_ZONE_ID" })?;

        ExporterConfig::builder()
            .api_token(ApiToken::new(api_token)?)
            .zone_id(ZoneId::new(zone_id)?)
            .start(self.start.as_str())
            .end(self.end.as_str())
            .limit(self.limit)
            .endpoint(self.endpoint.as_str())
            .build()
    }
}

/// Errors surfaced by the exporter binary.
#[derive(Debug, Error)]
pub enum ExporterError {
    /// The configuration is incomplete or invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The fetch failed.
    #[error("Failed to fetch metrics: {0}")]
    Fetch(#[from] FetchError),

    /// The metrics could not be serialized.
    #[error("Failed to serialize metrics: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Standard output could not be written.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Validates the configuration and fetches metrics.
///
/// Configuration is checked before the HTTP client is created, so a missing
/// credential never causes network activity.
///
/// # Errors
///
/// Returns [`ExporterError::Config`] or [`ExporterError::Fetch`].
pub async fn fetch(cli: &Cli) -> Result<Vec<StatusMetric>, ExporterError> {
    let config = cli.to_config()?;
    let client = AnalyticsClient::from_config(&config)?;
    Ok(client.fetch_metrics(&config.fetch_options()).await?)
}

/// Serializes metrics as a JSON array.
///
/// # Errors
///
/// Returns [`ExporterError::Serialize`] if serialization fails.
pub fn render_metrics(metrics: &[StatusMetric], pretty: bool) -> Result<String, ExporterError> {
    let json = if pretty {
        serde_json::to_string_pretty(metrics)?
    } else {
        serde_json::to_string(metrics)?
    };
    Ok(json)
}

/// Runs the exporter and returns the process exit code.
///
/// The JSON array goes to `stdout`; a one-line diagnostic goes to `stderr`
/// on failure.
pub async fn run<O: Write, E: Write>(cli: Cli, stdout: &mut O, stderr: &mut E) -> u8 {
    let result = match fetch(&cli).await {
        Ok(metrics) => render_metrics(&metrics, cli.pretty)
            .and_then(|json| writeln!(stdout, "{json}").map_err(ExporterError::from)),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Exporter run failed");
            // Nothing left to report to if stderr is gone.
            let _ = writeln!(stderr, "Error: {e}");
            EXIT_FAILURE
        }
    }
}
