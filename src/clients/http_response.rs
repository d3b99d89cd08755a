//! HTTP response type for upstream calls.

use std::collections::HashMap;

/// An HTTP response from the upstream endpoint.
///
/// Header names are lower-cased; a header may carry several values.
///
/// # Example
///
/// ```rust
/// use lens_gateway::clients::HttpResponse;
/// use serde_json::json;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-request-id".to_string(), vec!["req-1".to_string()]);
///
/// let response = HttpResponse::new(200, headers, json!({"data": null}));
/// assert!(response.is_ok());
/// assert_eq!(response.request_id(), Some("req-1"));
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns `true` if the body carries a GraphQL `errors` array.
    ///
    /// GraphQL servers may answer a failed operation with a 4xx status and
    /// a well-formed error payload; such responses are still GraphQL results.
    #[must_use]
    pub fn has_graphql_errors(&self) -> bool {
        self.body
            .get("errors")
            .is_some_and(serde_json::Value::is_array)
    }
}
