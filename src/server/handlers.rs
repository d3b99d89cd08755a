//! HTTP request handlers.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::clients::graphql::GraphqlTransport;
use crate::clients::GATEWAY_VERSION;
use crate::config::EthereumAddress;
use crate::profile::{resolve_profile_field, ProfileField};
use crate::server::errors::ApiError;
use crate::server::AppState;

/// Query parameters accepted by `GET /profile`.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileParams {
    /// Overrides the configured field (`handle` or `picture`).
    pub field: Option<String>,
    /// Overrides the configured address, when the server allows it.
    pub address: Option<String>,
}

/// Body of a successful `GET /profile`.
///
/// The value is always serialized under `handle`, as `null` when absent,
/// whichever field was selected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// The extracted handle or picture URL.
    pub handle: Option<String>,
}

/// `GET /profile`
///
/// Resolves the default profile of the configured address and returns the
/// selected field. A query string that does not parse is reported as
/// `bad_request` like any other invalid parameter.
pub async fn get_profile<T: GraphqlTransport>(
    State(state): State<AppState<T>>,
    params: Result<Query<ProfileParams>, QueryRejection>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::MalformedQuery {
        message: rejection.body_text(),
    })?;

    let field = match params.field.as_deref() {
        Some(raw) => raw.parse::<ProfileField>()?,
        None => state.config.profile_field(),
    };

    let address = match params.address {
        Some(raw) if state.config.allow_address_override() => EthereumAddress::new(raw)?,
        Some(_) => {
            tracing::debug!("Ignoring address parameter; overrides are disabled");
            state.config.address().clone()
        }
        None => state.config.address().clone(),
    };

    let handle = resolve_profile_field(
        &state.client,
        &address,
        field,
        state.config.strict_not_found(),
    )
    .await?;

    Ok(Json(ProfileResponse { handle }))
}

/// `GET /health`
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": GATEWAY_VERSION,
    }))
}

/// Fallback for unmatched routes.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
