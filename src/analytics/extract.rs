//! Decoding of the analytics response.
//!
//! The containers on the path `data.viewer.zones[0].httpRequestsAdaptiveGroups`
//! are required; a missing or mistyped container fails the whole decode.
//! Individual groups that lack `count` or `dimensions.edgeResponseStatus`
//! are skipped.

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::analytics::errors::ExtractError;
use crate::analytics::types::StatusMetric;

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<Data>,
    errors: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct Data {
    viewer: Option<Viewer>,
}

#[derive(Debug, Deserialize)]
struct Viewer {
    zones: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct Zone {
    #[serde(rename = "httpRequestsAdaptiveGroups")]
    http_requests_adaptive_groups: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct Group {
    count: Number,
    dimensions: Dimensions,
}

#[derive(Debug, Deserialize)]
struct Dimensions {
    #[serde(rename = "edgeResponseStatus")]
    edge_response_status: Number,
}

fn invalid_shape(reason: impl Into<String>) -> ExtractError {
    ExtractError::InvalidShape {
        reason: reason.into(),
    }
}

/// Casts a JSON number to `u64`. Negative values become 0 and floats are
/// truncated toward zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn coerce_u64(number: &Number) -> u64 {
    number.as_u64().unwrap_or_else(|| {
        if number.is_i64() {
            0
        } else {
            number.as_f64().map_or(0, |value| value as u64)
        }
    })
}

/// Casts a JSON number to `u16`, keeping the low 16 bits.
#[allow(clippy::cast_possible_truncation)]
fn coerce_u16(number: &Number) -> u16 {
    coerce_u64(number) as u16
}

fn graphql_messages(errors: &[Value]) -> String {
    errors
        .iter()
        .map(|error| {
            error
                .get("message")
                .and_then(Value::as_str)
                .map_or_else(|| error.to_string(), String::from)
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Extracts per-status metrics from a raw response body.
///
/// Metrics are returned in upstream order. An empty `zones` array or an
/// empty group list yields an empty vector.
///
/// # Errors
///
/// - [`ExtractError::Parse`] if the body is not JSON
/// - [`ExtractError::Graphql`] if the body carries a non-empty `errors` array
/// - [`ExtractError::InvalidShape`] if a required container is missing
///
/// # Example
///
/// ```rust
/// use cf_stats_exporter::{StatusMetric, analytics::extract_metrics};
///
/// let body = r#"{"data":{"viewer":{"zones":[{"httpRequestsAdaptiveGroups":[
///     {"count":5,"dimensions":{"edgeResponseStatus":200}}
/// ]}]}}}"#;
///
/// let metrics = extract_metrics(body).unwrap();
/// assert_eq!(metrics, vec![StatusMetric { status: 200, count: 5 }]);
/// ```
pub fn extract_metrics(body: &str) -> Result<Vec<StatusMetric>, ExtractError> {
    let value: Value = serde_json::from_str(body).map_err(ExtractError::Parse)?;

    let envelope = Envelope::deserialize(value).map_err(|e| invalid_shape(e.to_string()))?;

    // Only a non-empty array counts; any other `errors` value is ignored.
    if let Some(errors) = envelope
        .errors
        .as_ref()
        .and_then(Value::as_array)
        .filter(|e| !e.is_empty())
    {
        return Err(ExtractError::Graphql {
            messages: graphql_messages(errors),
        });
    }

    let zones = envelope
        .data
        .ok_or_else(|| invalid_shape("missing `data`"))?
        .viewer
        .ok_or_else(|| invalid_shape("missing `data.viewer`"))?
        .zones
        .ok_or_else(|| invalid_shape("missing `data.viewer.zones`"))?;

    let Some(first_zone) = zones.into_iter().next() else {
        return Ok(Vec::new());
    };

    let groups = Zone::deserialize(first_zone)
        .map_err(|e| invalid_shape(format!("zone entry: {e}")))?
        .http_requests_adaptive_groups
        .ok_or_else(|| invalid_shape("missing `httpRequestsAdaptiveGroups`"))?;

    let metrics = groups
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| match Group::deserialize(raw) {
            Ok(group) => Some(StatusMetric {
                status: coerce_u16(&group.dimensions.edge_response_status),
                count: coerce_u64(&group.count),
            }),
            Err(e) => {
                tracing::debug!(index, error = %e, "Skipping incomplete adaptive group");
                None
            }
        })
        .collect();

    Ok(metrics)
}
