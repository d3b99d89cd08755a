//! GraphQL client for the upstream social-graph API.
//!
//! This module provides a GraphQL client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) with a document cache and
//! configurable request policies.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: Executes operations through a transport and cache
//! - [`GraphqlTransport`]: The seam between the client and the wire
//! - [`HttpTransport`]: GraphQL-over-HTTP transport (POST or GET)
//! - [`GraphqlRequest`] / [`GraphqlResponse`]: Wire types
//! - [`OperationResult`]: Data, GraphQL errors and cache provenance
//! - [`GraphqlError`]: Transport failures
//!
//! # Request Policies
//!
//! The client defaults to
//! [`RequestPolicy::CacheAndNetwork`](crate::RequestPolicy::CacheAndNetwork):
//! a cached result is returned immediately and refreshed in the background.
//!
//! # Example
//!
//! ```rust,ignore
//! use lens_gateway::clients::graphql::{GraphqlClient, GraphqlRequest};
//! use serde_json::json;
//!
//! let client = GraphqlClient::from_config(&config)?;
//!
//! let result = client.execute(
//!     GraphqlRequest::new("query Profile($address: EthereumAddress!) { ... }")
//!         .variables(json!({ "address": "0xABC" })),
//! ).await?;
//!
//! if result.has_errors() {
//!     println!("GraphQL errors: {:?}", result.errors);
//! }
//! ```

mod cache;
mod client;
mod errors;
mod transport;
mod types;

pub use cache::{CachedResult, DocumentCache, DEFAULT_CACHE_CAPACITY};
pub use client::GraphqlClient;
pub use errors::GraphqlError;
pub use transport::{GraphqlTransport, HttpTransport};
pub use types::{
    ErrorLocation, GraphqlErrorEntry, GraphqlRequest, GraphqlResponse, OperationResult,
    ResultSource,
};
