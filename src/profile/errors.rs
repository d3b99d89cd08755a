//! Error types for profile lookups.

use thiserror::Error;

use crate::clients::graphql::{GraphqlError, GraphqlErrorEntry};
use crate::clients::HttpError;
use crate::profile::field::ProfileField;

/// Errors a profile lookup can end in.
///
/// - [`ProfileError::Transport`]: the upstream could not be reached or
///   answered with a non-GraphQL failure
/// - [`ProfileError::UpstreamData`]: the upstream answered with GraphQL
///   errors or with data of an unexpected shape
/// - [`ProfileError::NotFound`]: the profile or requested field is absent
///   and the lookup was strict
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Transport-level failure.
    #[error("Upstream request failed: {0}")]
    Transport(#[from] HttpError),

    /// GraphQL error payload or undecodable data.
    #[error("Upstream returned an invalid result: {message}")]
    UpstreamData {
        /// Summary of the failure.
        message: String,
        /// GraphQL errors as reported upstream.
        details: Vec<GraphqlErrorEntry>,
    },

    /// Nothing to return for the address.
    #[error("No {field} found for address {address}")]
    NotFound {
        /// The queried address.
        address: String,
        /// The requested field.
        field: ProfileField,
    },
}

impl ProfileError {
    /// Builds an [`ProfileError::UpstreamData`] from GraphQL error entries.
    #[must_use]
    pub fn from_graphql_errors(errors: Vec<GraphqlErrorEntry>) -> Self {
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::UpstreamData { message, details: errors }
    }
}

impl From<GraphqlError> for ProfileError {
    fn from(error: GraphqlError) -> Self {
        match error {
            GraphqlError::Http(e) => Self::Transport(e),
        }
    }
}

impl From<serde_json::Error> for ProfileError {
    fn from(error: serde_json::Error) -> Self {
        Self::UpstreamData {
            message: format!("unexpected response shape: {error}"),
            details: Vec::new(),
        }
    }
}
