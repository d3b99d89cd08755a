//! Default-profile lookup against the social-graph API.
//!
//! # Overview
//!
//! - [`DEFAULT_PROFILE_QUERY`]: The operation document
//! - [`fetch_default_profile`]: Runs the query and decodes the profile
//! - [`resolve_profile_field`]: Runs the query and extracts one field
//! - [`Profile`] / [`ProfilePicture`]: The typed response, with `picture`
//!   modeled as a union
//! - [`ProfileField`]: Which value is returned (handle or picture URL)
//! - [`ProfileError`]: Transport, upstream-data and not-found failures
//!
//! # Example
//!
//! ```rust,ignore
//! use lens_gateway::profile::{resolve_profile_field, ProfileField};
//!
//! let handle = resolve_profile_field(&client, &address, ProfileField::Handle, false).await?;
//! println!("{handle:?}");
//! ```

mod errors;
mod field;
mod query;
mod types;

pub use errors::ProfileError;
pub use field::ProfileField;
pub use query::{
    default_profile_request, fetch_default_profile, resolve_profile_field,
    DEFAULT_PROFILE_OPERATION, DEFAULT_PROFILE_QUERY,
};
pub use types::{DefaultProfileData, Media, Profile, ProfilePicture};
