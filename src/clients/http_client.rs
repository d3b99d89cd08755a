//! HTTP client for upstream GraphQL communication.
//!
//! This module provides the [`HttpClient`] type for sending requests to the
//! configured endpoint with a bounded timeout.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{EndpointUrl, GatewayConfig};

/// Gateway version from Cargo.toml.
pub const GATEWAY_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the upstream GraphQL endpoint.
///
/// The client handles:
/// - Default headers including User-Agent and Accept
/// - A per-request timeout taken from [`GatewayConfig::request_timeout`]
/// - Mapping of network, timeout, status and body failures to [`HttpError`]
///
/// No retries are attempted; a failed call is reported to the caller as is.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use lens_gateway::clients::{HttpClient, HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Post)
///     .body(json!({"query": "{ ping }"}))
///     .build()?;
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The endpoint every request is sent to.
    endpoint: EndpointUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Upper bound on a single request.
    timeout: Duration,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client bound to the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &GatewayConfig) -> Result<Self, HttpError> {
        let user_agent = format!("Lens Profile Gateway v{GATEWAY_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let timeout = config.request_timeout();
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .build()
            .map_err(HttpError::Network)?;

        Ok(Self {
            client,
            endpoint: config.endpoint().clone(),
            default_headers,
            timeout,
        })
    }

    /// Returns the endpoint this client talks to.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends an HTTP request to the endpoint.
    ///
    /// Non-2xx responses whose body carries a GraphQL `errors` array are
    /// returned as `Ok` so the caller can surface the GraphQL errors.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The connection fails (`Network`) or exceeds the timeout (`Timeout`)
    /// - A non-2xx response without GraphQL errors is received (`Response`)
    /// - A 2xx response body is not JSON (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }

        let url = self.endpoint.as_ref();
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url),
            HttpMethod::Post => self.client.post(url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await.map_err(|e| self.map_send_error(e))?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.map_err(|e| self.map_send_error(e))?;

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            match serde_json::from_str(&body_text) {
                Ok(value) => value,
                Err(source) if (200..=299).contains(&code) => {
                    return Err(HttpError::Decode { code, source });
                }
                // Keep the raw text so the error message stays useful
                Err(_) => serde_json::json!({ "raw_body": body_text }),
            }
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() || response.has_graphql_errors() {
            return Ok(response);
        }

        tracing::warn!(
            status = code,
            endpoint = %self.endpoint,
            "Upstream GraphQL endpoint returned an error status"
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message: Self::serialize_error(&response),
            error_reference: response.request_id().map(String::from),
        }))
    }

    fn map_send_error(&self, error: reqwest::Error) -> HttpError {
        if error.is_timeout() {
            tracing::warn!(timeout = ?self.timeout, endpoint = %self.endpoint, "Upstream request timed out");
            HttpError::Timeout {
                after: self.timeout,
            }
        } else {
            tracing::warn!(error = %error, endpoint = %self.endpoint, "Upstream request failed");
            HttpError::Network(error)
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response into a compact JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for key in ["error", "message", "raw_body"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}
