//! Selection of the profile field a request returns.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::profile::types::Profile;

/// Which value of the default profile is returned under `handle`.
///
/// # Example
///
/// ```rust
/// use lens_gateway::ProfileField;
///
/// assert_eq!("picture".parse::<ProfileField>().unwrap(), ProfileField::PictureUrl);
/// assert_eq!(ProfileField::default(), ProfileField::Handle);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// The profile handle.
    #[default]
    Handle,
    /// The original URL of a `MediaSet` picture.
    #[serde(rename = "picture")]
    PictureUrl,
}

impl ProfileField {
    /// Returns the name used in configuration and query parameters.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Handle => "handle",
            Self::PictureUrl => "picture",
        }
    }

    /// Reads this field from a profile.
    ///
    /// An absent profile, an absent handle, and a picture that is not a
    /// `MediaSet` all yield `None`.
    #[must_use]
    pub fn extract(&self, profile: Option<&Profile>) -> Option<String> {
        let profile = profile?;
        match self {
            Self::Handle => profile.handle.clone(),
            Self::PictureUrl => profile.picture_url().map(str::to_string),
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileField {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "handle" => Ok(Self::Handle),
            "picture" | "picture_url" | "picture-url" => Ok(Self::PictureUrl),
            _ => Err(ConfigError::InvalidProfileField {
                field: s.to_string(),
            }),
        }
    }
}
