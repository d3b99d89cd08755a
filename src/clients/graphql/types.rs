//! Wire and result types for GraphQL operations.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A GraphQL operation as sent over the wire.
///
/// # Example
///
/// ```rust
/// use lens_gateway::clients::graphql::GraphqlRequest;
/// use serde_json::json;
///
/// let request = GraphqlRequest::new("query ping { ping }")
///     .variables(json!({"address": "0xABC"}))
///     .operation_name("ping");
///
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["operationName"], "ping");
/// assert_eq!(body["variables"]["address"], "0xABC");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest {
    /// The operation document.
    pub query: String,
    /// Operation variables.
    pub variables: Option<serde_json::Value>,
    /// Name of the operation to run when the document holds several.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphqlRequest {
    /// Creates a request for the given document without variables.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }

    /// Sets the operation variables.
    #[must_use]
    pub fn variables(mut self, variables: serde_json::Value) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Sets the operation name.
    #[must_use]
    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    /// Returns the key under which results of this operation are cached.
    ///
    /// Two requests share a key when their documents and variables are equal.
    #[must_use]
    pub fn cache_key(&self) -> String {
        let variables = self
            .variables
            .as_ref()
            .map_or_else(String::new, serde_json::Value::to_string);
        format!("{}\u{0}{variables}", self.query)
    }
}

/// A location in the operation document that an error refers to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorLocation {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
}

/// A single entry of a GraphQL `errors` array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphqlErrorEntry {
    /// Human-readable description of the error.
    pub message: String,
    /// Document locations associated with the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<ErrorLocation>>,
    /// Response path of the field that failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<serde_json::Value>>,
    /// Server-specific error details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

/// A GraphQL response body as returned by the transport.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GraphqlResponse {
    /// The `data` member, absent or `null` when execution failed early.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    /// The `errors` member.
    #[serde(default)]
    pub errors: Vec<GraphqlErrorEntry>,
    /// The `extensions` member.
    #[serde(default)]
    pub extensions: Option<serde_json::Value>,
}

/// Where an [`OperationResult`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultSource {
    /// Served from the document cache.
    Cache,
    /// Fetched from the upstream endpoint.
    Network,
}

/// The outcome of executing a GraphQL operation.
///
/// A result may carry data, GraphQL errors, or both. Transport failures are
/// reported separately through [`GraphqlError`](super::GraphqlError).
#[derive(Clone, Debug, PartialEq)]
pub struct OperationResult {
    /// The operation data, if any.
    pub data: Option<serde_json::Value>,
    /// GraphQL errors reported by the server.
    pub errors: Vec<GraphqlErrorEntry>,
    /// Where this result came from.
    pub source: ResultSource,
    /// `true` when served from cache while a refresh is in flight.
    pub stale: bool,
}

impl OperationResult {
    pub(crate) fn from_network(response: GraphqlResponse) -> Self {
        Self {
            data: response.data,
            errors: response.errors,
            source: ResultSource::Network,
            stale: false,
        }
    }

    pub(crate) const fn from_cache(data: Option<serde_json::Value>, stale: bool) -> Self {
        Self {
            data,
            errors: Vec::new(),
            source: ResultSource::Cache,
            stale,
        }
    }

    /// Returns `true` if the server reported GraphQL errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Deserializes the `data` member into a typed value.
    ///
    /// Returns `Ok(None)` when there is no data.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the data does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>, serde_json::Error> {
        match &self.data {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(data) => T::deserialize(data).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_missing_operation_name() {
        let request = GraphqlRequest::new("{ ping }");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body, json!({"query": "{ ping }", "variables": null}));
    }

    #[test]
    fn test_cache_key_depends_on_variables() {
        let a = GraphqlRequest::new("q").variables(json!({"address": "0x1"}));
        let b = GraphqlRequest::new("q").variables(json!({"address": "0x2"}));
        let c = GraphqlRequest::new("q").variables(json!({"address": "0x1"}));

        assert_ne!(a.cache_key(), b.cache_key());
        assert_eq!(a.cache_key(), c.cache_key());
    }

    #[test]
    fn test_response_parses_errors_with_locations() {
        let response: GraphqlResponse = serde_json::from_value(json!({
            "data": null,
            "errors": [{
                "message": "Invalid address",
                "locations": [{"line": 2, "column": 3}],
                "path": ["defaultProfile"],
                "extensions": {"code": "BAD_USER_INPUT"}
            }]
        }))
        .unwrap();

        assert!(response.data.is_none());
        assert_eq!(response.errors.len(), 1);
        assert_eq!(
            response.errors[0].locations,
            Some(vec![ErrorLocation { line: 2, column: 3 }])
        );
    }

    #[test]
    fn test_response_tolerates_empty_body() {
        let response: GraphqlResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response, GraphqlResponse::default());
    }

    #[test]
    fn test_decode_null_data_is_none() {
        let result = OperationResult::from_cache(Some(serde_json::Value::Null), false);
        let decoded: Option<serde_json::Value> = result.decode().unwrap();
        assert!(decoded.is_none());
    }

    #[test]
    fn test_decode_reports_shape_mismatch() {
        #[derive(Debug, Deserialize)]
        struct Expected {
            #[allow(dead_code)]
            count: u32,
        }

        let result = OperationResult::from_cache(Some(json!({"count": "many"})), false);
        assert!(result.decode::<Expected>().is_err());
    }
}
