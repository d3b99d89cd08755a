//! GraphQL client implementation.
//!
//! This module provides the [`GraphqlClient`] type, which executes operations
//! through a [`GraphqlTransport`] and keeps a document cache governed by a
//! [`RequestPolicy`].

use std::sync::Arc;

use crate::clients::graphql::cache::{DocumentCache, DEFAULT_CACHE_CAPACITY};
use crate::clients::graphql::transport::{GraphqlTransport, HttpTransport};
use crate::clients::graphql::types::{GraphqlRequest, OperationResult};
use crate::clients::graphql::GraphqlError;
use crate::config::{GatewayConfig, RequestPolicy};

/// GraphQL client bound to one endpoint.
///
/// The client is constructed once and shared (it is cheap to clone: the
/// transport and cache live behind `Arc`s). Results are cached per document
/// and variables; how the cache is consulted depends on the request policy.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use lens_gateway::clients::graphql::{GraphqlClient, GraphqlRequest};
/// use serde_json::json;
///
/// let client = GraphqlClient::from_config(&config)?;
///
/// let result = client
///     .execute(GraphqlRequest::new("query { ping }").variables(json!({})))
///     .await?;
///
/// if result.stale {
///     println!("served from cache, refresh in flight");
/// }
/// ```
#[derive(Debug)]
pub struct GraphqlClient<T = HttpTransport> {
    transport: Arc<T>,
    cache: Arc<DocumentCache>,
    policy: RequestPolicy,
}

impl<T> Clone for GraphqlClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            cache: Arc::clone(&self.cache),
            policy: self.policy,
        }
    }
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient<HttpTransport> {
    /// Creates a client that talks HTTP to the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, GraphqlError> {
        let transport = HttpTransport::new(config)?;
        tracing::info!(
            endpoint = %config.endpoint(),
            policy = %config.request_policy(),
            cache_capacity = config.cache_capacity(),
            "GraphQL client initialized"
        );
        Ok(Self::with_cache_capacity(
            transport,
            config.request_policy(),
            config.cache_capacity(),
        ))
    }
}

impl<T: GraphqlTransport> GraphqlClient<T> {
    /// Creates a client over the given transport with a default-sized cache.
    #[must_use]
    pub fn new(transport: T, policy: RequestPolicy) -> Self {
        Self::with_cache_capacity(transport, policy, DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a client whose cache keeps at most `capacity` results.
    #[must_use]
    pub fn with_cache_capacity(transport: T, policy: RequestPolicy, capacity: usize) -> Self {
        Self {
            transport: Arc::new(transport),
            cache: Arc::new(DocumentCache::with_capacity(capacity)),
            policy,
        }
    }

    /// Returns the default request policy.
    #[must_use]
    pub const fn policy(&self) -> RequestPolicy {
        self.policy
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the document cache.
    #[must_use]
    pub fn cache(&self) -> &DocumentCache {
        &self.cache
    }

    /// Drops every cached result.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Executes an operation with the client's default policy.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for transport failures. GraphQL-level
    /// errors are returned inside the [`OperationResult`].
    pub async fn execute(&self, request: GraphqlRequest) -> Result<OperationResult, GraphqlError> {
        self.execute_with_policy(request, self.policy).await
    }

    /// Executes an operation with an explicit policy.
    ///
    /// - `CacheFirst`: cached result if present, otherwise network.
    /// - `CacheOnly`: cached result, or an empty result without data.
    /// - `NetworkOnly`: always network.
    /// - `CacheAndNetwork`: cached result marked stale plus a background
    ///   refresh, or network when nothing is cached.
    ///
    /// Network results without GraphQL errors are written to the cache.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] for transport failures.
    pub async fn execute_with_policy(
        &self,
        request: GraphqlRequest,
        policy: RequestPolicy,
    ) -> Result<OperationResult, GraphqlError> {
        let key = request.cache_key();

        if policy.reads_cache() {
            if let Some(cached) = self.cache.get(&key) {
                let stale = policy == RequestPolicy::CacheAndNetwork;
                tracing::debug!(%policy, stale, "GraphQL cache hit");
                if stale {
                    self.spawn_refresh(key, request);
                }
                return Ok(OperationResult::from_cache(cached.data, stale));
            }

            if policy == RequestPolicy::CacheOnly {
                tracing::debug!("GraphQL cache miss with cache-only policy");
                return Ok(OperationResult::from_cache(None, false));
            }
        }

        tracing::debug!(%policy, "GraphQL cache miss, fetching from network");
        let response = self.transport.execute(&request).await?;
        let result = OperationResult::from_network(response);
        if !result.has_errors() {
            self.cache.insert(key, result.data.clone());
        }

        Ok(result)
    }

    fn spawn_refresh(&self, key: String, request: GraphqlRequest) {
        if !self.cache.begin_refresh(&key) {
            return;
        }

        let transport = Arc::clone(&self.transport);
        let guard = RefreshGuard {
            cache: Arc::clone(&self.cache),
            key,
        };
        tokio::spawn(async move {
            match transport.execute(&request).await {
                Ok(response) if response.errors.is_empty() => {
                    guard.cache.insert(guard.key.as_str(), response.data);
                    tracing::debug!("GraphQL cache entry refreshed");
                }
                Ok(response) => {
                    tracing::warn!(
                        errors = response.errors.len(),
                        "GraphQL refresh returned errors; keeping cached result"
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %e, "GraphQL refresh failed; keeping cached result");
                }
            }
        });
    }
}

/// Clears a key's refreshing mark when the refresh task ends, even by panic.
struct RefreshGuard {
    cache: Arc<DocumentCache>,
    key: String,
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        self.cache.end_refresh(&self.key);
    }
}
