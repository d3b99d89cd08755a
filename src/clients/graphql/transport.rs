//! Pluggable transports that carry GraphQL operations to a server.

use std::future::Future;

use crate::clients::graphql::types::{GraphqlRequest, GraphqlResponse};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::config::GatewayConfig;

/// Sends a GraphQL operation and returns the raw GraphQL response.
///
/// [`GraphqlClient`](super::GraphqlClient) is generic over this trait so that
/// tests can substitute an in-memory transport for the HTTP one.
pub trait GraphqlTransport: Send + Sync + 'static {
    /// Executes one operation.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when the operation could not be delivered or
    /// the reply is not a GraphQL response.
    fn execute(
        &self,
        request: &GraphqlRequest,
    ) -> impl Future<Output = Result<GraphqlResponse, HttpError>> + Send;
}

/// GraphQL-over-HTTP transport built on [`HttpClient`].
///
/// Operations are POSTed as JSON unless `prefer_get_method` is set, in which
/// case `query`, `variables` and `operationName` travel as URL parameters.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: HttpClient,
    prefer_get_method: bool,
}

impl HttpTransport {
    /// Creates a transport for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the HTTP client cannot be built.
    pub fn new(config: &GatewayConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            prefer_get_method: config.prefer_get_method(),
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    fn build_request(&self, request: &GraphqlRequest) -> Result<HttpRequest, HttpError> {
        let builder = if self.prefer_get_method {
            let mut builder =
                HttpRequest::builder(HttpMethod::Get).query_param("query", request.query.as_str());
            if let Some(variables) = &request.variables {
                builder = builder.query_param("variables", variables.to_string());
            }
            if let Some(name) = &request.operation_name {
                builder = builder.query_param("operationName", name.as_str());
            }
            builder
        } else {
            let mut body = serde_json::json!({
                "query": request.query,
                "variables": request.variables,
            });
            if let Some(name) = &request.operation_name {
                body["operationName"] = serde_json::json!(name);
            }
            HttpRequest::builder(HttpMethod::Post).body(body)
        };

        Ok(builder.build()?)
    }
}

impl GraphqlTransport for HttpTransport {
    async fn execute(&self, request: &GraphqlRequest) -> Result<GraphqlResponse, HttpError> {
        let http_request = self.build_request(request)?;
        tracing::debug!(
            method = %http_request.http_method,
            operation = request.operation_name.as_deref().unwrap_or("anonymous"),
            "Sending GraphQL operation"
        );

        let response = self.http_client.request(http_request).await?;
        let code = response.code;
        serde_json::from_value(response.body).map_err(|source| HttpError::Decode { code, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EndpointUrl, EthereumAddress};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_config(endpoint: &str, prefer_get: bool) -> GatewayConfig {
        GatewayConfig::builder()
            .endpoint(EndpointUrl::new(endpoint).unwrap())
            .address(EthereumAddress::new("0xABC").unwrap())
            .prefer_get_method(prefer_get)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_post_transport_sends_operation_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!({
                "query": "query ping { ping }",
                "variables": {"address": "0xABC"},
                "operationName": "ping"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ping": 1}})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(&create_config(&mock_server.uri(), false)).unwrap();
        let request = GraphqlRequest::new("query ping { ping }")
            .variables(json!({"address": "0xABC"}))
            .operation_name("ping");

        let response = transport.execute(&request).await.unwrap();
        assert_eq!(response.data, Some(json!({"ping": 1})));
        assert!(response.errors.is_empty());
    }

    #[tokio::test]
    async fn test_get_transport_encodes_variables_as_json() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("query", "{ ping }"))
            .and(query_param("variables", r#"{"address":"0xABC"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"ping": 2}})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(&create_config(&mock_server.uri(), true)).unwrap();
        let request = GraphqlRequest::new("{ ping }").variables(json!({"address": "0xABC"}));

        let response = transport.execute(&request).await.unwrap();
        assert_eq!(response.data, Some(json!({"ping": 2})));
    }

    #[tokio::test]
    async fn test_graphql_errors_on_bad_request_status_are_returned() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errors": [{"message": "Variable \"$address\" got invalid value"}]
            })))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(&create_config(&mock_server.uri(), false)).unwrap();
        let response = transport
            .execute(&GraphqlRequest::new("{ ping }"))
            .await
            .unwrap();

        assert!(response.data.is_none());
        assert_eq!(response.errors.len(), 1);
    }

    #[tokio::test]
    async fn test_non_graphql_json_is_decode_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"errors": "nope"})))
            .mount(&mock_server)
            .await;

        let transport = HttpTransport::new(&create_config(&mock_server.uri(), false)).unwrap();
        let result = transport.execute(&GraphqlRequest::new("{ ping }")).await;

        assert!(matches!(result, Err(HttpError::Decode { code: 200, .. })));
    }
}
