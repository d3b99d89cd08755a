//! Error types for gateway configuration.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! settings are rejected at startup rather than on the first request.
//!
//! # Example
//!
//! ```rust
//! use lens_gateway::{ConfigError, EthereumAddress};
//!
//! let result = EthereumAddress::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidAddress { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building or validating gateway configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide an absolute URL with scheme (e.g., 'https://api.lens.dev').")]
    InvalidEndpointUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Ethereum address is invalid.
    #[error("Invalid address '{address}'. Expected a '0x'-prefixed hexadecimal string.")]
    InvalidAddress {
        /// The invalid address that was provided.
        address: String,
    },

    /// Profile field selector is unknown.
    #[error("Invalid profile field '{field}'. Expected 'handle' or 'picture'.")]
    InvalidProfileField {
        /// The unknown field name.
        field: String,
    },

    /// Request policy name is unknown.
    #[error("Invalid request policy '{policy}'. Expected one of 'cache-first', 'cache-only', 'network-only', 'cache-and-network'.")]
    InvalidRequestPolicy {
        /// The unknown policy name.
        policy: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_address_error_message() {
        let error = ConfigError::InvalidAddress {
            address: "nope".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("nope"));
        assert!(message.contains("0x"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "endpoint" };
        let message = error.to_string();
        assert!(message.contains("endpoint"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_profile_field_lists_choices() {
        let error = ConfigError::InvalidProfileField {
            field: "avatar".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("avatar"));
        assert!(message.contains("handle"));
        assert!(message.contains("picture"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::MissingRequiredField { field: "address" };
        let _: &dyn std::error::Error = &error;
    }
}
