//! Tests for the HTTP transport module

use super::*;
use crate::auth::{AuthConfig, Authenticator};
use crate::error::Error;
use crate::types::BackoffType;
use reqwest::Method;
use serde::Deserialize;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Debug, Deserialize)]
struct EchoResponse {
    value: u32,
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.max_retries, 3);
    assert!(config.base_url.is_none());
    assert!(config.rate_limit.is_some());
    assert!(config.user_agent.starts_with("stratus-cli/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.stratus.example")
        .timeout(Duration::from_secs(60))
        .max_retries(5)
        .backoff(
            BackoffType::Linear,
            Duration::from_millis(200),
            Duration::from_secs(30),
        )
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(
        config.base_url,
        Some("https://api.stratus.example".to_string())
    );
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.max_retries, 5);
    assert_eq!(config.backoff_type, BackoffType::Linear);
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[tokio::test]
async fn test_post_json_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/streams/UpdateShardCount"))
        .and(body_json(serde_json::json!({"streamName": "events"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config);
    let response: EchoResponse = client
        .post_json(
            "/v1/streams/UpdateShardCount",
            &serde_json::json!({"streamName": "events"}),
        )
        .await
        .unwrap();

    assert_eq!(response.value, 42);
}

#[tokio::test]
async fn test_api_error_envelope_decoded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/secrets/UpdateSecret"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": "ResourceNotFoundException",
            "message": "Secret not found: prod/db"
        })))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config);
    let result: crate::error::Result<EchoResponse> = client
        .post_json("/v1/secrets/UpdateSecret", &serde_json::json!({}))
        .await;

    match result.unwrap_err() {
        Error::Api { code, message } => {
            assert_eq!(code, "ResourceNotFoundException");
            assert_eq!(message, "Secret not found: prod/db");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unstructured_error_falls_back_to_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/audit/DeleteAuditConfiguration"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config);
    let result = client
        .request(
            Method::POST,
            "/v1/audit/DeleteAuditConfiguration",
            RequestConfig::new().json(serde_json::json!({})),
        )
        .await;

    assert!(matches!(
        result.unwrap_err(),
        Error::HttpStatus { status: 403, .. }
    ));
}

#[tokio::test]
async fn test_retry_on_500_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/backup/ListRestoreJobs"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/backup/ListRestoreJobs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": 1})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(3)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_secs(1),
        )
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config);
    let response: EchoResponse = client
        .post_json("/v1/backup/ListRestoreJobs", &serde_json::json!({}))
        .await
        .unwrap();

    assert_eq!(response.value, 1);
}

#[tokio::test]
async fn test_rate_limit_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/compute/MatchInstanceTypes"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("retry-after", "1")
                .set_body_string("Rate limited"),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/compute/MatchInstanceTypes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": 2})))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(2)
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config);
    let response: EchoResponse = client
        .post_json("/v1/compute/MatchInstanceTypes", &serde_json::json!({}))
        .await
        .unwrap();

    assert_eq!(response.value, 2);
}

#[tokio::test]
async fn test_max_retries_exceeded() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/always-fail"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Server error"))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .max_retries(2)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(10),
            Duration::from_secs(1),
        )
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config);
    let result = client
        .request(Method::POST, "/v1/always-fail", RequestConfig::new())
        .await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_authenticator_applied() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/secure"))
        .and(header("X-Api-Key", "secret123"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(mock_server.uri())
        .no_rate_limit()
        .build();

    let authenticator = Authenticator::new(AuthConfig::ApiKey {
        header: "X-Api-Key".to_string(),
        key: "secret123".to_string(),
    });

    let client = HttpClient::with_auth(config, authenticator);
    let response = client
        .request(Method::POST, "/v1/secure", RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_full_url_bypasses_base() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/test"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder().no_rate_limit().build();
    let client = HttpClient::with_config(config);

    let response = client
        .request(
            Method::POST,
            &format!("{}/v1/test", mock_server.uri()),
            RequestConfig::new(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[test]
fn test_calculate_backoff_constant() {
    let config = HttpClientConfig::builder()
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(100),
            Duration::from_secs(10),
        )
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config);

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(5), Duration::from_millis(100));
}

#[test]
fn test_calculate_backoff_exponential_respects_max() {
    let config = HttpClientConfig::builder()
        .backoff(
            BackoffType::Exponential,
            Duration::from_millis(100),
            Duration::from_millis(500),
        )
        .no_rate_limit()
        .build();

    let client = HttpClient::with_config(config);

    assert_eq!(client.calculate_backoff(0), Duration::from_millis(100));
    assert_eq!(client.calculate_backoff(1), Duration::from_millis(200));
    assert_eq!(client.calculate_backoff(10), Duration::from_millis(500));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(client.has_rate_limiter());
}
