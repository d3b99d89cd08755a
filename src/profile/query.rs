//! The default-profile operation and its execution.

use crate::clients::graphql::{GraphqlClient, GraphqlRequest, GraphqlTransport};
use crate::config::EthereumAddress;
use crate::profile::errors::ProfileError;
use crate::profile::field::ProfileField;
use crate::profile::types::{DefaultProfileData, Profile};

/// Operation name of [`DEFAULT_PROFILE_QUERY`].
pub const DEFAULT_PROFILE_OPERATION: &str = "defaultProfile";

/// Looks up the default profile of an address.
///
/// `__typename` is selected on `picture` so the union member can be told
/// apart without relying on fragment shape.
pub const DEFAULT_PROFILE_QUERY: &str = r"query defaultProfile($address: EthereumAddress!) {
  defaultProfile(request: { ethereumAddress: $address }) {
    id
    name
    isDefault
    metadata
    handle
    picture {
      __typename
      ... on MediaSet {
        original {
          url
        }
      }
    }
    ownedBy
  }
}";

/// Builds the default-profile request for `address`.
///
/// The variables are exactly `{ "address": <address> }`.
#[must_use]
pub fn default_profile_request(address: &EthereumAddress) -> GraphqlRequest {
    GraphqlRequest::new(DEFAULT_PROFILE_QUERY)
        .variables(serde_json::json!({ "address": address.as_ref() }))
        .operation_name(DEFAULT_PROFILE_OPERATION)
}

/// Fetches the default profile of `address`.
///
/// Returns `Ok(None)` when the upstream has no default profile for it.
///
/// # Errors
///
/// - [`ProfileError::Transport`] if the upstream call fails
/// - [`ProfileError::UpstreamData`] if the result carries GraphQL errors or
///   cannot be decoded
pub async fn fetch_default_profile<T: GraphqlTransport>(
    client: &GraphqlClient<T>,
    address: &EthereumAddress,
) -> Result<Option<Profile>, ProfileError> {
    let result = client.execute(default_profile_request(address)).await?;

    if result.has_errors() {
        tracing::warn!(
            %address,
            errors = result.errors.len(),
            "defaultProfile query returned GraphQL errors"
        );
        return Err(ProfileError::from_graphql_errors(result.errors));
    }

    let data: Option<DefaultProfileData> = result.decode()?;
    let profile = data.and_then(|d| d.default_profile);
    tracing::debug!(
        %address,
        found = profile.is_some(),
        stale = result.stale,
        "defaultProfile resolved"
    );
    Ok(profile)
}

/// Fetches the default profile of `address` and extracts `field`.
///
/// When `strict` is `false`, a missing profile or field yields `Ok(None)`.
///
/// # Errors
///
/// Everything [`fetch_default_profile`] returns, plus
/// [`ProfileError::NotFound`] when `strict` is set and there is no value.
pub async fn resolve_profile_field<T: GraphqlTransport>(
    client: &GraphqlClient<T>,
    address: &EthereumAddress,
    field: ProfileField,
    strict: bool,
) -> Result<Option<String>, ProfileError> {
    let profile = fetch_default_profile(client, address).await?;
    let value = field.extract(profile.as_ref());

    if value.is_none() && strict {
        return Err(ProfileError::NotFound {
            address: address.to_string(),
            field,
        });
    }

    Ok(value)
}
