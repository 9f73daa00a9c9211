//! Configuration error types for the BigCommerce API client.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Validation happens synchronously, before any I/O.
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{ConfigError, StoreHash};
//!
//! let result = StoreHash::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyStoreHash)));
//! ```

use thiserror::Error;

/// Errors that can occur while configuring the client.
///
/// Each variant provides a clear, actionable message. Construction with an
/// invalid configuration fails before any network call is attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store hash cannot be empty.
    #[error("Store hash cannot be empty. Provide the hash that identifies the store, e.g. 'abc123'.")]
    EmptyStoreHash,

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Provide a store API account access token.")]
    EmptyAuthToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_hash_error_message() {
        let error = ConfigError::EmptyStoreHash;
        let message = error.to_string();
        assert!(message.contains("Store hash cannot be empty"));
    }

    #[test]
    fn test_empty_auth_token_error_message() {
        let error = ConfigError::EmptyAuthToken;
        let message = error.to_string();
        assert!(message.contains("Auth token cannot be empty"));
        assert!(message.contains("access token"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyStoreHash;
        let _: &dyn std::error::Error = &error;
    }
}
