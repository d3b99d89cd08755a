//! Configuration types for the profile gateway.
//!
//! This module provides the configuration used to construct the GraphQL
//! client and the HTTP server. Configuration is read once at startup and
//! shared immutably afterwards.
//!
//! # Overview
//!
//! - [`GatewayConfig`]: All gateway settings
//! - [`GatewayConfigBuilder`]: A builder for constructing [`GatewayConfig`] instances
//! - [`EndpointUrl`]: A validated upstream GraphQL endpoint
//! - [`EthereumAddress`]: A validated profile lookup address
//! - [`RequestPolicy`]: How the GraphQL client uses its cache
//!
//! # Example
//!
//! ```rust
//! use lens_gateway::{EndpointUrl, EthereumAddress, GatewayConfig, ProfileField};
//!
//! let config = GatewayConfig::builder()
//!     .endpoint(EndpointUrl::new("https://api.lens.dev").unwrap())
//!     .address(EthereumAddress::new("0xABC").unwrap())
//!     .profile_field(ProfileField::PictureUrl)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.address().as_ref(), "0xABC");
//! ```

mod newtypes;
mod policy;

pub use newtypes::{EndpointUrl, EthereumAddress};
pub use policy::RequestPolicy;

use std::time::Duration;

use crate::clients::graphql::DEFAULT_CACHE_CAPACITY;
use crate::error::ConfigError;
use crate::profile::ProfileField;

/// Default upper bound on a single upstream call.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the profile gateway.
///
/// `GatewayConfig` is `Clone`, `Send`, and `Sync`; the server keeps one
/// instance behind an `Arc` for its whole lifetime.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    endpoint: EndpointUrl,
    address: EthereumAddress,
    profile_field: ProfileField,
    request_policy: RequestPolicy,
    request_timeout: Duration,
    prefer_get_method: bool,
    strict_not_found: bool,
    allow_address_override: bool,
    cache_capacity: usize,
}

impl GatewayConfig {
    /// Creates a new builder for constructing a `GatewayConfig`.
    #[must_use]
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::new()
    }

    /// Returns the upstream GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the address whose default profile is served.
    #[must_use]
    pub const fn address(&self) -> &EthereumAddress {
        &self.address
    }

    /// Returns the field extracted when a request does not name one.
    #[must_use]
    pub const fn profile_field(&self) -> ProfileField {
        self.profile_field
    }

    /// Returns the GraphQL client request policy.
    #[must_use]
    pub const fn request_policy(&self) -> RequestPolicy {
        self.request_policy
    }

    /// Returns the per-call upstream timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Returns whether queries are sent with GET instead of POST.
    #[must_use]
    pub const fn prefer_get_method(&self) -> bool {
        self.prefer_get_method
    }

    /// Returns whether a missing profile is reported as 404.
    #[must_use]
    pub const fn strict_not_found(&self) -> bool {
        self.strict_not_found
    }

    /// Returns whether callers may query a different address.
    #[must_use]
    pub const fn allow_address_override(&self) -> bool {
        self.allow_address_override
    }

    /// Returns the maximum number of results kept in the document cache.
    #[must_use]
    pub const fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }
}

// Verify GatewayConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GatewayConfig>();
};

/// Builder for constructing [`GatewayConfig`] instances.
///
/// Required fields are `endpoint` and `address`.
///
/// # Defaults
///
/// - `profile_field`: [`ProfileField::Handle`]
/// - `request_policy`: [`RequestPolicy::CacheAndNetwork`]
/// - `request_timeout`: 10 seconds
/// - `prefer_get_method`, `strict_not_found`, `allow_address_override`: `false`
/// - `cache_capacity`: [`DEFAULT_CACHE_CAPACITY`]
#[derive(Debug, Default)]
pub struct GatewayConfigBuilder {
    endpoint: Option<EndpointUrl>,
    address: Option<EthereumAddress>,
    profile_field: Option<ProfileField>,
    request_policy: Option<RequestPolicy>,
    request_timeout: Option<Duration>,
    prefer_get_method: bool,
    strict_not_found: bool,
    allow_address_override: bool,
    cache_capacity: Option<usize>,
}

impl GatewayConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the upstream GraphQL endpoint (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the queried address (required).
    #[must_use]
    pub fn address(mut self, address: EthereumAddress) -> Self {
        self.address = Some(address);
        self
    }

    /// Sets the default extracted field.
    #[must_use]
    pub const fn profile_field(mut self, field: ProfileField) -> Self {
        self.profile_field = Some(field);
        self
    }

    /// Sets the GraphQL client request policy.
    #[must_use]
    pub const fn request_policy(mut self, policy: RequestPolicy) -> Self {
        self.request_policy = Some(policy);
        self
    }

    /// Sets the per-call upstream timeout.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Sends queries as GET requests with URL-encoded parameters.
    #[must_use]
    pub const fn prefer_get_method(mut self, prefer_get: bool) -> Self {
        self.prefer_get_method = prefer_get;
        self
    }

    /// Reports a missing profile as 404 instead of `{"handle": null}`.
    #[must_use]
    pub const fn strict_not_found(mut self, strict: bool) -> Self {
        self.strict_not_found = strict;
        self
    }

    /// Lets callers pass an `address` query parameter.
    #[must_use]
    pub const fn allow_address_override(mut self, allow: bool) -> Self {
        self.allow_address_override = allow;
        self
    }

    /// Sets how many results the document cache keeps before evicting.
    #[must_use]
    pub const fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = Some(capacity);
        self
    }

    /// Builds the [`GatewayConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` or
    /// `address` are not set.
    pub fn build(self) -> Result<GatewayConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;
        let address = self
            .address
            .ok_or(ConfigError::MissingRequiredField { field: "address" })?;

        Ok(GatewayConfig {
            endpoint,
            address,
            profile_field: self.profile_field.unwrap_or_default(),
            request_policy: self.request_policy.unwrap_or_default(),
            request_timeout: self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            prefer_get_method: self.prefer_get_method,
            strict_not_found: self.strict_not_found,
            allow_address_override: self.allow_address_override,
            cache_capacity: self.cache_capacity.unwrap_or(DEFAULT_CACHE_CAPACITY),
        })
    }
}
