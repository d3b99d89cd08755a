//! Cache request policies for the GraphQL client.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// How the GraphQL client combines its document cache with the network.
///
/// # Example
///
/// ```rust
/// use lens_gateway::RequestPolicy;
///
/// let policy: RequestPolicy = "cache-first".parse().unwrap();
/// assert_eq!(policy, RequestPolicy::CacheFirst);
/// assert_eq!(RequestPolicy::default(), RequestPolicy::CacheAndNetwork);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RequestPolicy {
    /// Serve from cache when present, otherwise fetch and cache.
    CacheFirst,
    /// Serve from cache only; never touch the network.
    CacheOnly,
    /// Always fetch, then update the cache.
    NetworkOnly,
    /// Serve a cached result immediately and refresh it in the background.
    #[default]
    CacheAndNetwork,
}

impl RequestPolicy {
    /// Returns the kebab-case name of this policy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CacheFirst => "cache-first",
            Self::CacheOnly => "cache-only",
            Self::NetworkOnly => "network-only",
            Self::CacheAndNetwork => "cache-and-network",
        }
    }

    /// Returns `true` if this policy may answer from the cache.
    #[must_use]
    pub const fn reads_cache(&self) -> bool {
        !matches!(self, Self::NetworkOnly)
    }
}

impl fmt::Display for RequestPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cache-first" => Ok(Self::CacheFirst),
            "cache-only" => Ok(Self::CacheOnly),
            "network-only" => Ok(Self::NetworkOnly),
            "cache-and-network" => Ok(Self::CacheAndNetwork),
            _ => Err(ConfigError::InvalidRequestPolicy {
                policy: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse_and_display_agree() {
        for policy in [
            RequestPolicy::CacheFirst,
            RequestPolicy::CacheOnly,
            RequestPolicy::NetworkOnly,
            RequestPolicy::CacheAndNetwork,
        ] {
            assert_eq!(policy.to_string().parse::<RequestPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_policy_parse_is_case_insensitive() {
        assert_eq!(
            "Cache-And-Network".parse::<RequestPolicy>().unwrap(),
            RequestPolicy::CacheAndNetwork
        );
    }

    #[test]
    fn test_policy_rejects_unknown() {
        let result = "stale-while-revalidate".parse::<RequestPolicy>();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidRequestPolicy { .. })
        ));
    }

    #[test]
    fn test_only_network_only_skips_cache() {
        assert!(RequestPolicy::CacheFirst.reads_cache());
        assert!(RequestPolicy::CacheOnly.reads_cache());
        assert!(RequestPolicy::CacheAndNetwork.reads_cache());
        assert!(!RequestPolicy::NetworkOnly.reads_cache());
    }
}
