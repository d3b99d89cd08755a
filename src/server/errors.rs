//! Mapping of gateway failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::graphql::GraphqlErrorEntry;
use crate::clients::HttpError;
use crate::error::ConfigError;
use crate::profile::ProfileError;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The profile lookup failed.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// A request parameter was invalid.
    #[error(transparent)]
    BadRequest(#[from] ConfigError),

    /// The query string could not be parsed.
    #[error("Invalid query string: {message}")]
    MalformedQuery {
        /// Parser message.
        message: String,
    },

    /// No route matched the request.
    #[error("Route not found: {path}")]
    RouteNotFound {
        /// The requested path.
        path: String,
    },
}

/// JSON body of every error response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error kind.
    pub kind: String,
    /// Human-readable description.
    pub message: String,
    /// GraphQL errors reported upstream, when any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<GraphqlErrorEntry>,
}

impl ApiError {
    /// Returns the HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Profile(ProfileError::Transport(HttpError::InvalidRequest(_))) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Profile(ProfileError::Transport(e)) if e.is_unreachable() => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            Self::Profile(ProfileError::Transport(_) | ProfileError::UpstreamData { .. }) => {
                StatusCode::BAD_GATEWAY
            }
            Self::Profile(ProfileError::NotFound { .. }) | Self::RouteNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            Self::BadRequest(_) | Self::MalformedQuery { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// Returns the machine-readable kind reported in [`ErrorBody::kind`].
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Profile(ProfileError::Transport(_)) => "transport",
            Self::Profile(ProfileError::UpstreamData { .. }) => "upstream_data",
            Self::Profile(ProfileError::NotFound { .. }) => "not_found",
            Self::BadRequest(_) | Self::MalformedQuery { .. } => "bad_request",
            Self::RouteNotFound { .. } => "route_not_found",
        }
    }

    fn into_body(self) -> ErrorBody {
        let kind = self.kind().to_string();
        let message = self.to_string();
        let details = match self {
            Self::Profile(ProfileError::UpstreamData { details, .. }) => details,
            _ => Vec::new(),
        };
        ErrorBody {
            kind,
            message,
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), kind = self.kind(), error = %self, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), kind = self.kind(), error = %self, "Request rejected");
        }

        (status, Json(self.into_body())).into_response()
    }
}
