//! Typed view of the `defaultProfile` response.

use serde::Deserialize;

/// The `data` member of a `defaultProfile` response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultProfileData {
    /// The default profile, absent when the address has none.
    #[serde(default)]
    pub default_profile: Option<Profile>,
}

/// A social-graph profile.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Upstream profile identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Whether this is the address's default profile.
    #[serde(default)]
    pub is_default: bool,
    /// Opaque metadata reference.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    /// Profile handle (e.g., `naruto.lens`).
    #[serde(default)]
    pub handle: Option<String>,
    /// Profile picture.
    #[serde(default)]
    pub picture: Option<ProfilePicture>,
    /// Address owning the profile.
    pub owned_by: String,
}

impl Profile {
    /// Returns the original picture URL when the picture is a media set.
    #[must_use]
    pub fn picture_url(&self) -> Option<&str> {
        self.picture.as_ref().and_then(ProfilePicture::original_url)
    }
}

/// The `picture` union.
///
/// Variants are chosen by `__typename`. A payload without `__typename` is a
/// media set only if it carries an `original` shaped like [`Media`];
/// anything else lands in [`ProfilePicture::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPicture")]
pub enum ProfilePicture {
    /// Hosted media with an original rendition.
    MediaSet {
        /// The original rendition, if selected.
        original: Option<Media>,
    },
    /// An NFT used as a profile picture.
    NftImage,
    /// Any union member this gateway does not read.
    Other {
        /// The reported `__typename`, if any.
        typename: Option<String>,
    },
}

impl ProfilePicture {
    /// Returns `original.url` for media sets, `None` for every other member.
    #[must_use]
    pub fn original_url(&self) -> Option<&str> {
        match self {
            Self::MediaSet { original } => original.as_ref().map(|media| media.url.as_str()),
            Self::NftImage | Self::Other { .. } => None,
        }
    }
}

/// A single media rendition.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Location of the media.
    pub url: String,
    /// MIME type, when the upstream reports it.
    #[serde(default)]
    pub mime_type: Option<String>,
}

#[derive(Deserialize)]
struct RawPicture {
    #[serde(rename = "__typename", default)]
    typename: Option<String>,
    // Other union members may carry an `original` of a different shape
    #[serde(default)]
    original: Option<serde_json::Value>,
}

impl RawPicture {
    fn media(&self) -> Option<Media> {
        self.original
            .as_ref()
            .and_then(|value| Media::deserialize(value).ok())
    }
}

impl From<RawPicture> for ProfilePicture {
    fn from(raw: RawPicture) -> Self {
        match raw.typename.as_deref() {
            Some("MediaSet") => Self::MediaSet {
                original: raw.media(),
            },
            Some("NftImage") => Self::NftImage,
            None => match raw.media() {
                Some(original) => Self::MediaSet {
                    original: Some(original),
                },
                None => Self::Other { typename: None },
            },
            _ => Self::Other {
                typename: raw.typename,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn picture(value: serde_json::Value) -> ProfilePicture {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_media_set_yields_original_url() {
        let pic = picture(json!({
            "__typename": "MediaSet",
            "original": {"url": "https://img/x.png", "mimeType": "image/png"}
        }));

        assert_eq!(pic.original_url(), Some("https://img/x.png"));
    }

    #[test]
    fn test_nft_image_yields_no_url() {
        let pic = picture(json!({
            "__typename": "NftImage",
            "uri": "ipfs://abc",
            "tokenId": "1"
        }));

        assert_eq!(pic, ProfilePicture::NftImage);
        assert_eq!(pic.original_url(), None);
    }

    #[test]
    fn test_foreign_original_shape_does_not_fail() {
        let nft = picture(json!({"__typename": "NftImage", "original": "ipfs://x"}));
        assert_eq!(nft, ProfilePicture::NftImage);

        let other = picture(json!({"__typename": "Other", "original": {"uri": "x"}}));
        assert_eq!(
            other,
            ProfilePicture::Other {
                typename: Some("Other".to_string())
            }
        );
        assert_eq!(other.original_url(), None);
    }

    #[test]
    fn test_malformed_media_set_original_yields_no_url() {
        let pic = picture(json!({"__typename": "MediaSet", "original": {"uri": "x"}}));

        assert_eq!(pic, ProfilePicture::MediaSet { original: None });
        assert_eq!(pic.original_url(), None);
    }

    #[test]
    fn test_unknown_typename_yields_no_url() {
        let pic = picture(json!({
            "__typename": "AnimatedImage",
            "original": {"url": "https://img/should-not-be-read.gif"}
        }));

        assert_eq!(
            pic,
            ProfilePicture::Other {
                typename: Some("AnimatedImage".to_string())
            }
        );
        assert_eq!(pic.original_url(), None);
    }

    #[test]
    fn test_untagged_fragment_shapes() {
        // Only the MediaSet fragment can populate `original`
        let pic = picture(json!({"original": {"url": "https://img/y.png"}}));
        assert_eq!(pic.original_url(), Some("https://img/y.png"));

        // Non-matching members come back as an empty object
        let pic = picture(json!({}));
        assert_eq!(pic, ProfilePicture::Other { typename: None });
    }

    #[test]
    fn test_media_set_without_original() {
        let pic = picture(json!({"__typename": "MediaSet"}));
        assert_eq!(pic, ProfilePicture::MediaSet { original: None });
        assert_eq!(pic.original_url(), None);
    }

    #[test]
    fn test_profile_parses_full_shape() {
        let data: DefaultProfileData = serde_json::from_value(json!({
            "defaultProfile": {
                "id": "0x01",
                "name": "Naruto",
                "isDefault": true,
                "metadata": "ipfs://meta",
                "handle": "naruto.lens",
                "picture": {
                    "__typename": "MediaSet",
                    "original": {"url": "https://img/x.png"}
                },
                "ownedBy": "0xABC"
            }
        }))
        .unwrap();

        let profile = data.default_profile.unwrap();
        assert_eq!(profile.handle.as_deref(), Some("naruto.lens"));
        assert_eq!(profile.picture_url(), Some("https://img/x.png"));
        assert!(profile.is_default);
        assert_eq!(profile.owned_by, "0xABC");
    }

    #[test]
    fn test_null_picture_and_missing_profile() {
        let data: DefaultProfileData = serde_json::from_value(json!({
            "defaultProfile": {"id": "0x02", "picture": null, "ownedBy": "0xABC"}
        }))
        .unwrap();
        assert_eq!(data.default_profile.unwrap().picture_url(), None);

        let data: DefaultProfileData =
            serde_json::from_value(json!({"defaultProfile": null})).unwrap();
        assert!(data.default_profile.is_none());

        let data: DefaultProfileData = serde_json::from_value(json!({})).unwrap();
        assert!(data.default_profile.is_none());
    }
}
