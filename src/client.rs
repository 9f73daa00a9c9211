//! The root client composing every endpoint family.

use crate::clients::HttpClient;
use crate::config::ClientConfig;
use crate::error::ConfigError;
use crate::rest::{Customers, Inventories, Segments, Subscribers};

/// A BigCommerce Management API client.
///
/// Composes the endpoint families over one shared HTTP pipeline. The
/// client holds only immutable configuration after construction, so a
/// single instance can serve concurrent tasks without synchronization;
/// cloning is cheap (the underlying connection pool is shared).
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::{Client, QueryOptions};
///
/// let client = Client::new("store-hash", "auth-token")?;
///
/// let customers = client.customers.get(QueryOptions::new()).await?;
/// let inventory = client.inventories.items.get(QueryOptions::new()).await?;
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    /// The `customers` endpoint family.
    pub customers: Customers,
    /// The `inventory` endpoint family.
    pub inventories: Inventories,
    /// The `segments` endpoint.
    pub segments: Segments,
    /// The `customers/subscribers` endpoint.
    pub subscribers: Subscribers,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a client for the given store with default configuration
    /// (latest API version, production host).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the store hash or auth token is empty.
    /// Validation happens here, before any network call is attempted.
    pub fn new(
        store_hash: impl Into<String>,
        auth_token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_config(&ClientConfig::new(store_hash, auth_token)?))
    }

    /// Creates a client from an explicit configuration.
    #[must_use]
    pub fn from_config(config: &ClientConfig) -> Self {
        let http = HttpClient::new(config);
        Self {
            customers: Customers::new(&http),
            inventories: Inventories::new(&http),
            segments: Segments::new(&http),
            subscribers: Subscribers::new(&http),
        }
    }
}
