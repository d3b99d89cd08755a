//! HTTP-specific error types for upstream GraphQL calls.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the upstream API
//! - [`InvalidHttpRequestError`]: A request failed validation before sending
//! - [`HttpError`]: Unified error type encompassing all transport failures
//!
//! # Example
//!
//! ```rust,ignore
//! use lens_gateway::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("Upstream error {}: {}", e.code, e.message),
//!     Err(HttpError::Timeout { after }) => println!("Gave up after {after:?}"),
//!     Err(e) => println!("Transport error: {e}"),
//! }
//! ```

use std::time::Duration;

use thiserror::Error;

/// Error returned when the upstream API answers with a non-successful status.
///
/// # Example
///
/// ```rust
/// use lens_gateway::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 503,
///     message: r#"{"error":"Service Unavailable"}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().contains("503"));
/// ```
#[derive(Debug, Error)]
#[error("Upstream responded with status {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was built without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET request was built with a body.
    #[error("Cannot send a body with {method}; use query parameters instead.")]
    UnexpectedBody {
        /// The HTTP method that does not accept a body.
        method: String,
    },
}

/// Unified error type for all transport-level failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The upstream call did not complete in time.
    #[error("Upstream request timed out after {after:?}")]
    Timeout {
        /// The configured timeout that elapsed.
        after: Duration,
    },

    /// A successful response carried a body that is not valid JSON.
    #[error("Upstream returned an unreadable body (status {code}): {source}")]
    Decode {
        /// The HTTP status code of the response.
        code: u16,
        /// The JSON parse failure.
        #[source]
        source: serde_json::Error,
    },
}

impl HttpError {
    /// Returns `true` if the upstream could not be reached at all.
    ///
    /// Network failures and timeouts fall in this group; responses that
    /// arrived but were unusable do not.
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout { .. })
    }
}
