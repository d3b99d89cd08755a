//! # Lens Profile Gateway
//!
//! A small HTTP gateway that serves one value from the default profile of a
//! configured Ethereum address on the Lens social graph.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`GatewayConfig`] and [`GatewayConfigBuilder`]
//! - Validated newtypes for the upstream endpoint and the queried address
//! - A GraphQL client with a document cache and request policies
//!   ([`GraphqlClient`], [`RequestPolicy`])
//! - The `defaultProfile` query and typed response ([`profile`])
//! - An axum router exposing `GET /profile` and `GET /health` ([`server`])
//!
//! ## Quick Start
//!
//! ```rust
//! use lens_gateway::{EndpointUrl, EthereumAddress, GatewayConfig, RequestPolicy};
//!
//! let config = GatewayConfig::builder()
//!     .endpoint(EndpointUrl::new("https://api.lens.dev").unwrap())
//!     .address(EthereumAddress::new("0x3A5bd1E37b099aE3386D13947b6a90d97675e5e3").unwrap())
//!     .request_policy(RequestPolicy::CacheAndNetwork)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().host_name(), "api.lens.dev");
//! ```
//!
//! ## Serving
//!
//! ```rust,ignore
//! use lens_gateway::server::{build_router, serve, AppState};
//! use lens_gateway::GraphqlClient;
//!
//! let client = GraphqlClient::from_config(&config)?;
//! let router = build_router(AppState::new(client, config));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! serve(listener, router).await?;
//! ```
//!
//! A request then returns the handle (or picture URL) under `handle`:
//!
//! ```text
//! GET /profile            -> 200 {"handle": "naruto.lens"}
//! GET /profile?field=picture -> 200 {"handle": "https://.../avatar.png"}
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: The client, cache and configuration are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod profile;
pub mod server;

// Re-export public types at crate root for convenience
pub use config::{EndpointUrl, EthereumAddress, GatewayConfig, GatewayConfigBuilder, RequestPolicy};
pub use error::ConfigError;
pub use profile::{Profile, ProfileError, ProfileField, ProfilePicture};

// Re-export client types
pub use clients::{
    GraphqlClient, GraphqlError, GraphqlTransport, HttpClient, HttpError, HttpMethod, HttpRequest,
    HttpRequestBuilder, HttpResponse, HttpResponseError, HttpTransport, InvalidHttpRequestError,
};
