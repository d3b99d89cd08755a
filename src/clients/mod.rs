//! HTTP and GraphQL client types for upstream communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client bound to the configured endpoint
//! - [`HttpRequest`]: A request to be sent to the endpoint
//! - [`HttpResponse`]: A parsed response from the endpoint
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST)
//! - [`HttpError`]: Transport-level failures
//! - [`graphql::GraphqlClient`]: Cached GraphQL client over a pluggable transport
//!
//! # Timeouts and Retries
//!
//! Every call is bounded by the configured timeout. Failed calls are not
//! retried; the error is returned to the caller.

mod errors;
pub mod graphql;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, GATEWAY_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

// Re-export GraphQL client types at the clients module level
pub use graphql::{GraphqlClient, GraphqlError, GraphqlTransport, HttpTransport};
