//! HTTP surface of the gateway.
//!
//! # Routes
//!
//! - `GET /profile[?field=handle|picture][&address=0x...]` → `{"handle": ...}`
//! - `GET /health` → `{"status": "ok", "version": ...}`
//! - anything else → `404 {"kind": "route_not_found", "message": ...}`
//!
//! Failures are returned as [`ErrorBody`] JSON with a status chosen by
//! [`ApiError::status`].

mod errors;
mod handlers;

pub use errors::{ApiError, ErrorBody};
pub use handlers::{get_profile, health, route_not_found, ProfileParams, ProfileResponse};

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::clients::graphql::{GraphqlClient, GraphqlTransport, HttpTransport};
use crate::config::GatewayConfig;

/// Shared state handed to every handler.
///
/// Both members are created once at startup and never mutated; the client's
/// document cache synchronizes itself.
#[derive(Debug)]
pub struct AppState<T = HttpTransport> {
    /// The GraphQL client.
    pub client: GraphqlClient<T>,
    /// Gateway configuration.
    pub config: Arc<GatewayConfig>,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<T: GraphqlTransport> AppState<T> {
    /// Creates the state from an already constructed client.
    #[must_use]
    pub fn new(client: GraphqlClient<T>, config: GatewayConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }
}

/// Builds the application router.
pub fn build_router<T: GraphqlTransport>(state: AppState<T>) -> Router {
    Router::new()
        .route("/profile", get(get_profile::<T>))
        .route("/health", get(health))
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `router` on `listener` until Ctrl-C is received.
///
/// # Errors
///
/// Returns an I/O error if the server fails while accepting connections.
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Profile gateway listening");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl-C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
