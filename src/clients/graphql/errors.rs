//! GraphQL-specific error types.
//!
//! Only transport failures are errors at this level. GraphQL-level errors
//! (validation errors, resolver errors) arrive with the result in
//! [`OperationResult::errors`](super::OperationResult::errors) and are left
//! to the caller to interpret.
//!
//! # Example
//!
//! ```rust,ignore
//! use lens_gateway::clients::graphql::GraphqlError;
//!
//! match client.execute(request).await {
//!     Ok(result) if result.has_errors() => println!("GraphQL errors: {:?}", result.errors),
//!     Ok(result) => println!("Data: {:?}", result.data),
//!     Err(GraphqlError::Http(e)) => println!("Transport error: {e}"),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL operations.
///
/// # Example
///
/// ```rust
/// use lens_gateway::clients::graphql::GraphqlError;
/// use lens_gateway::clients::{HttpError, HttpResponseError};
///
/// let http_error = HttpError::Response(HttpResponseError {
///     code: 502,
///     message: r#"{"error":"Bad Gateway"}"#.to_string(),
///     error_reference: None,
/// });
/// let graphql_error: GraphqlError = http_error.into();
/// assert!(graphql_error.to_string().contains("Bad Gateway"));
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// A transport-level error occurred.
    ///
    /// This covers network errors, timeouts, non-2xx responses without a
    /// GraphQL error payload, and unreadable bodies.
    #[error(transparent)]
    Http(#[from] HttpError),
}
