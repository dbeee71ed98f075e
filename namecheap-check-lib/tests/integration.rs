// namecheap-check-lib/tests/integration.rs

//! Integration tests for namecheap-check-lib: full client pipeline against a
//! local mock API server, plus an ignored live-sandbox smoke test.

use httpmock::prelude::*;
use namecheap_check_lib::{
    get_public_ip_from, AvailabilityClient, CheckError, CheckOptions, Credentials,
    MAX_DOMAINS_PER_REQUEST,
};
use std::time::Duration;

const API_PATH: &str = "/xml.response";

fn credentials() -> Credentials {
    Credentials::new("apiuser", "apikey")
}

fn client_for(server: &MockServer) -> AvailabilityClient {
    client_with_timeout(server, Duration::from_secs(5))
}

fn client_with_timeout(server: &MockServer, timeout: Duration) -> AvailabilityClient {
    let options = CheckOptions::default()
        .with_timeout(timeout)
        .with_base_url(server.url(API_PATH));
    AvailabilityClient::new(credentials(), "203.0.113.7", options).unwrap()
}

/// Render a minimal but realistic check response body.
fn response_body(results: &[(&str, bool)]) -> String {
    let rows: String = results
        .iter()
        .map(|(domain, available)| {
            format!(
                r#"    <DomainCheckResult Domain="{}" Available="{}" IsPremiumName="false" />"#,
                domain, available
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<ApiResponse Status="OK" xmlns="http://api.namecheap.com/xml.response">
  <Errors />
  <CommandResponse Type="namecheap.domains.check">
{}
  </CommandResponse>
</ApiResponse>"#,
        rows
    )
}

#[tokio::test]
async fn check_splits_available_and_taken() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path(API_PATH)
            .query_param("Command", "namecheap.domains.check")
            .query_param("ApiUser", "apiuser")
            .query_param("ApiKey", "apikey")
            .query_param("UserName", "apiuser")
            .query_param("ClientIp", "203.0.113.7")
            .query_param("DomainList", "example.com,example.org");
        then.status(200)
            .header("content-type", "application/xml")
            .body(response_body(&[("example.com", true), ("example.org", false)]));
    });

    let client = client_for(&server);
    let domains = vec!["example.com".to_string(), "example.org".to_string()];
    let result = client.check(&domains).await.unwrap();

    mock.assert();
    assert!(result.errors.is_empty());
    assert_eq!(result.available.len(), 1);
    assert_eq!(result.available[0].domain, "example.com");
    assert!(!result.available[0].premium);
    assert_eq!(result.taken.len(), 1);
    assert_eq!(result.taken[0].domain, "example.org");
}

#[tokio::test]
async fn one_hundred_twenty_domains_issue_three_ordered_batches() {
    let server = MockServer::start();
    let domains: Vec<String> = (0..120).map(|i| format!("domain{:03}.com", i)).collect();

    // One mock per expected chunk, matched on the exact DomainList value,
    // so overlap or reordering would leave a mock with zero hits.
    let chunks: Vec<Vec<String>> = domains
        .chunks(MAX_DOMAINS_PER_REQUEST)
        .map(|chunk| chunk.to_vec())
        .collect();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[0].len(), 50);
    assert_eq!(chunks[1].len(), 50);
    assert_eq!(chunks[2].len(), 20);

    let mocks: Vec<_> = chunks
        .iter()
        .map(|chunk| {
            let body_rows: Vec<(&str, bool)> =
                chunk.iter().map(|domain| (domain.as_str(), false)).collect();
            server.mock(|when, then| {
                when.method(GET)
                    .path(API_PATH)
                    .query_param("DomainList", chunk.join(","));
                then.status(200).body(response_body(&body_rows));
            })
        })
        .collect();

    let client = client_for(&server);
    let result = client.check(&domains).await.unwrap();

    for mock in &mocks {
        mock.assert();
    }
    assert_eq!(result.result_count(), 120);
    assert!(result.available.is_empty());
}

#[tokio::test]
async fn api_error_element_lands_in_aggregate_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(API_PATH);
        then.status(200).body(
            r#"<ApiResponse Status="ERROR">
                 <Errors><Error Number="1011102">Invalid API Key</Error></Errors>
               </ApiResponse>"#,
        );
    });

    let client = client_for(&server);
    let result = client.check(&["example.com".to_string()]).await.unwrap();

    assert_eq!(result.errors, vec!["Invalid API Key"]);
    assert_eq!(result.result_count(), 0);
}

#[tokio::test]
async fn malformed_body_degrades_to_soft_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(API_PATH);
        then.status(200).body("<not valid");
    });

    let client = client_for(&server);
    let result = client.check(&["example.com".to_string()]).await.unwrap();

    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("XML parse error:"));
    assert_eq!(result.result_count(), 0);
}

#[tokio::test]
async fn http_error_status_fails_the_whole_run() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(API_PATH);
        then.status(500).body("internal error");
    });

    let client = client_for(&server);
    let err = client.check(&["example.com".to_string()]).await.unwrap_err();

    assert!(matches!(err, CheckError::Network { .. }));
}

#[tokio::test]
async fn slow_response_is_a_timeout_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path(API_PATH);
        then.status(200)
            .delay(Duration::from_secs(2))
            .body(response_body(&[("example.com", true)]));
    });

    let client = client_with_timeout(&server, Duration::from_millis(200));
    let err = client.check(&["example.com".to_string()]).await.unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got: {}", err);
}

#[tokio::test]
async fn failure_in_second_batch_discards_first_batch_results() {
    let server = MockServer::start();
    let domains: Vec<String> = (0..60).map(|i| format!("domain{:02}.com", i)).collect();
    let first_chunk = domains[..MAX_DOMAINS_PER_REQUEST].join(",");
    let second_chunk = domains[MAX_DOMAINS_PER_REQUEST..].join(",");

    server.mock(|when, then| {
        when.method(GET)
            .path(API_PATH)
            .query_param("DomainList", first_chunk.clone());
        then.status(200).body(response_body(&[("domain00.com", true)]));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path(API_PATH)
            .query_param("DomainList", second_chunk.clone());
        then.status(502).body("bad gateway");
    });

    let client = client_for(&server);
    let err = client.check(&domains).await.unwrap_err();

    // Fail-fast: the run returns an error, not a partial aggregate.
    assert!(matches!(err, CheckError::Network { .. }));
}

#[tokio::test]
async fn public_ip_detection_trims_the_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200).body("198.51.100.4\n");
    });

    let ip = get_public_ip_from(&server.url("/"), Duration::from_secs(5), false)
        .await
        .unwrap();
    assert_eq!(ip, "198.51.100.4");
}

#[tokio::test]
async fn public_ip_detection_surfaces_http_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(503).body("unavailable");
    });

    let err = get_public_ip_from(&server.url("/"), Duration::from_secs(5), false)
        .await
        .unwrap_err();
    assert!(matches!(err, CheckError::Network { .. }));
}

// ============================================================
// Live network tests (run explicitly with `cargo test -- --ignored`)
// ============================================================

/// The sandbox endpoint rejects bogus credentials with an Error element,
/// which must surface as a soft error in the aggregate, not a failure.
#[tokio::test]
#[ignore]
async fn live_sandbox_reports_credential_error_softly() {
    let options = CheckOptions::default().with_sandbox(true);
    let client =
        AvailabilityClient::new(Credentials::new("nobody", "invalid-key"), "127.0.0.1", options)
            .unwrap();

    let result = client.check(&["example.com".to_string()]).await.unwrap();
    assert!(
        !result.errors.is_empty(),
        "sandbox should reject bogus credentials with an Error element"
    );
}
