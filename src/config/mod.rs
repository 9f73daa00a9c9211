//! Client configuration types.
//!
//! This module provides [`ClientConfig`] plus the validated newtypes and
//! API version definitions it is built from. Configuration is immutable
//! after construction: the client holds only the store identity, the auth
//! token, and the version/host selection, so it tolerates concurrent reads
//! without synchronization.

mod newtypes;
mod version;

pub use newtypes::{AuthToken, StoreHash};
pub use version::{ApiVersion, ResourceFamily};

use crate::error::ConfigError;

/// Immutable configuration for a BigCommerce API client.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{ApiVersion, ClientConfig};
///
/// let config = ClientConfig::new("abc123", "access-token")
///     .unwrap()
///     .with_api_version(ApiVersion::V3);
///
/// assert_eq!(config.store_hash().as_ref(), "abc123");
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    store_hash: StoreHash,
    auth_token: AuthToken,
    api_version: ApiVersion,
    api_host: Option<String>,
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};

impl ClientConfig {
    /// Creates a configuration for the given store.
    ///
    /// Defaults to the latest API version and the production API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the store hash or auth token is empty.
    /// Validation happens here, before any request is made.
    pub fn new(
        store_hash: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            store_hash: StoreHash::new(store_hash)?,
            auth_token: AuthToken::new(auth_token)?,
            api_version: ApiVersion::latest(),
            api_host: None,
        })
    }

    /// Selects the API version to target.
    #[must_use]
    pub const fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }

    /// Overrides the API origin (scheme + host), e.g. for a proxy or a
    /// local test server. Requests go to `https://api.bigcommerce.com`
    /// when unset.
    #[must_use]
    pub fn with_api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    /// Returns the store hash.
    #[must_use]
    pub const fn store_hash(&self) -> &StoreHash {
        &self.store_hash
    }

    /// Returns the auth token.
    #[must_use]
    pub const fn auth_token(&self) -> &AuthToken {
        &self.auth_token
    }

    /// Returns the API version requests will target.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the API origin override, if any.
    #[must_use]
    pub fn api_host(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}
