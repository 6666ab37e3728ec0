//! End-to-end tests for the command line entry point.
//!
//! `run` is driven with in-memory stdout/stderr buffers and a mock server
//! standing in for the Cloudflare endpoint.

use cf_stats_exporter::cli::{run, Cli, EXIT_FAILURE, EXIT_SUCCESS};
use cf_stats_exporter::config::{DEFAULT_END, DEFAULT_LIMIT, DEFAULT_START};
use cf_stats_exporter::StatusMetric;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_cli(server: &MockServer, api_token: Option<&str>) -> Cli {
    Cli {
        api_token: api_token.map(String::from),
        zone_id: Some("zone-abc".to_string()),
        start: DEFAULT_START.to_string(),
        end: DEFAULT_END.to_string(),
        limit: DEFAULT_LIMIT,
        endpoint: format!("{}/client/v4/graphql", server.uri()),
        pretty: false,
    }
}

async fn run_captured(cli: Cli) -> (u8, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = run(cli, &mut stdout, &mut stderr).await;
    (
        code,
        String::from_utf8(stdout).unwrap(),
        String::from_utf8(stderr).unwrap(),
    )
}

#[tokio::test]
async fn test_success_prints_json_array() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data":{"viewer":{"zones":[{"httpRequestsAdaptiveGroups":[{"count":5,"dimensions":{"edgeResponseStatus":200}},{"count":2,"dimensions":{"edgeResponseStatus":404}}]}]}}}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let (code, stdout, stderr) = run_captured(create_cli(&server, Some("token"))).await;

    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(
        stdout,
        "[{\"status\":200,\"count\":5},{\"status\":404,\"count\":2}]\n"
    );
    assert!(stderr.is_empty());
}

#[tokio::test]
async fn test_zero_metrics_exits_successfully() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"data":{"viewer":{"zones":[]}}}"#),
        )
        .mount(&server)
        .await;

    let (code, stdout, _) = run_captured(create_cli(&server, Some("token"))).await;

    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(stdout, "[]\n");
}

#[tokio::test]
async fn test_pretty_output() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"data":{"viewer":{"zones":[{"httpRequestsAdaptiveGroups":[{"count":1,"dimensions":{"edgeResponseStatus":502}}]}]}}}"#,
        ))
        .mount(&server)
        .await;

    let mut cli = create_cli(&server, Some("token"));
    cli.pretty = true;
    let (code, stdout, _) = run_captured(cli).await;

    assert_eq!(code, EXIT_SUCCESS);
    assert!(stdout.lines().count() > 1);
    let parsed: Vec<StatusMetric> = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        parsed,
        vec![StatusMetric {
            status: 502,
            count: 1
        }]
    );
}

#[tokio::test]
async fn test_missing_token_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (code, stdout, stderr) = run_captured(create_cli(&server, None)).await;

    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.contains("CF_API_TOKEN environment variable is required"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_zone_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut cli = create_cli(&server, Some("token"));
    cli.zone_id = None;
    let (code, _, stderr) = run_captured(cli).await;

    assert_eq!(code, EXIT_FAILURE);
    assert!(stderr.contains("CF_ZONE_ID environment variable is required"));
}

#[tokio::test]
async fn test_token_with_newline_is_config_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (code, _, stderr) = run_captured(create_cli(&server, Some("abc\ndef"))).await;

    assert_eq!(code, EXIT_FAILURE);
    assert!(stderr.contains("not allowed in an HTTP header"));
    assert!(!stderr.contains("Network error"));
}

#[tokio::test]
async fn test_http_500_exits_with_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let (code, stdout, stderr) = run_captured(create_cli(&server, Some("token"))).await;

    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.contains("500"));
}

#[tokio::test]
async fn test_malformed_response_exits_with_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let (code, stdout, stderr) = run_captured(create_cli(&server, Some("token"))).await;

    assert_eq!(code, EXIT_FAILURE);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Failed to parse response"));
}

#[test]
fn test_zero_limit_is_rejected_without_runtime_work() {
    let cli = Cli {
        api_token: Some("token".to_string()),
        zone_id: Some("zone".to_string()),
        start: DEFAULT_START.to_string(),
        end: DEFAULT_END.to_string(),
        limit: 0,
        endpoint: "http://127.0.0.1:1".to_string(),
        pretty: false,
    };

    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = tokio_test::block_on(run(cli, &mut stdout, &mut stderr));

    assert_eq!(code, EXIT_FAILURE);
    assert!(String::from_utf8(stderr).unwrap().contains("Invalid limit 0"));
}
