//! Integration tests for the GraphQL client over HTTP.
//!
//! These tests verify request policies, cache behavior, and error
//! propagation against a mocked GraphQL server.

use std::time::Duration;

use lens_gateway::clients::graphql::{GraphqlRequest, ResultSource};
use lens_gateway::{
    EndpointUrl, EthereumAddress, GatewayConfig, GraphqlClient, GraphqlError, HttpError,
    RequestPolicy,
};
use serde_json::json;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> GatewayConfig {
    GatewayConfig::builder()
        .endpoint(EndpointUrl::new(server.uri()).unwrap())
        .address(EthereumAddress::new("0xABC").unwrap())
        .request_timeout(Duration::from_millis(500))
        .build()
        .unwrap()
}

fn ping() -> GraphqlRequest {
    GraphqlRequest::new("query Ping { ping }").variables(json!({}))
}

async fn mount_ping(server: &MockServer, value: &str) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "ping": value } })))
        .mount(server)
        .await;
}

// ============================================================================
// Client Construction Tests
// ============================================================================

#[test]
fn test_graphql_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
}

#[tokio::test]
async fn test_client_uses_configured_policy() {
    let server = MockServer::start().await;
    let config = GatewayConfig::builder()
        .endpoint(EndpointUrl::new(server.uri()).unwrap())
        .address(EthereumAddress::new("0xABC").unwrap())
        .request_policy(RequestPolicy::CacheFirst)
        .build()
        .unwrap();

    let client = GraphqlClient::from_config(&config).unwrap();

    assert_eq!(client.policy(), RequestPolicy::CacheFirst);
    assert!(client.cache().is_empty());
}

// ============================================================================
// Cache-and-network Tests
// ============================================================================

#[tokio::test]
async fn test_cache_and_network_serves_stale_then_refreshes() {
    let server = MockServer::start().await;
    mount_ping(&server, "first").await;

    let client = GraphqlClient::from_config(&config_for(&server)).unwrap();

    let fresh = client.execute(ping()).await.unwrap();
    assert_eq!(fresh.source, ResultSource::Network);
    assert!(!fresh.stale);
    assert_eq!(fresh.data, Some(json!({ "ping": "first" })));

    server.reset().await;
    mount_ping(&server, "second").await;

    let cached = client.execute(ping()).await.unwrap();
    assert_eq!(cached.source, ResultSource::Cache);
    assert!(cached.stale);
    assert_eq!(cached.data, Some(json!({ "ping": "first" })));

    // The background refresh eventually replaces the cached entry
    let mut refreshed = None;
    for _ in 0..50 {
        let result = client
            .execute_with_policy(ping(), RequestPolicy::CacheOnly)
            .await
            .unwrap();
        if result.data == Some(json!({ "ping": "second" })) {
            refreshed = result.data;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(refreshed, Some(json!({ "ping": "second" })));
}

#[tokio::test]
async fn test_results_with_errors_are_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "Invalid address" }]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let client = GraphqlClient::from_config(&config_for(&server)).unwrap();

    let first = client.execute(ping()).await.unwrap();
    assert!(first.has_errors());
    assert!(client.cache().is_empty());

    let second = client.execute(ping()).await.unwrap();
    assert_eq!(second.source, ResultSource::Network);
}

#[tokio::test]
async fn test_network_only_bypasses_cache() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": { "ping": "pong" } })))
        .expect(2)
        .mount(&server)
        .await;

    let client = GraphqlClient::from_config(&config_for(&server)).unwrap();

    for _ in 0..2 {
        let result = client
            .execute_with_policy(ping(), RequestPolicy::NetworkOnly)
            .await
            .unwrap();
        assert_eq!(result.source, ResultSource::Network);
    }
}

// ============================================================================
// Error Tests
// ============================================================================

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": { "ping": "late" } }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = GraphqlClient::from_config(&config_for(&server)).unwrap();
    let result = client.execute(ping()).await;

    assert!(matches!(
        result,
        Err(GraphqlError::Http(HttpError::Timeout { .. }))
    ));
}

#[tokio::test]
async fn test_upstream_status_error_is_propagated() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).insert_header("x-request-id", "req-42"))
        .mount(&server)
        .await;

    let client = GraphqlClient::from_config(&config_for(&server)).unwrap();
    let result = client.execute(ping()).await;

    match result {
        Err(GraphqlError::Http(HttpError::Response(e))) => {
            assert_eq!(e.code, 503);
            assert_eq!(e.error_reference.as_deref(), Some("req-42"));
        }
        other => panic!("Expected response error, got: {other:?}"),
    }
}
