//! The inventory endpoint family.
//!
//! Inventory is read-only through this API: levels are adjusted elsewhere
//! (orders, the control panel, the adjustments API surface), so [`Items`]
//! only lists.

use crate::clients::{Error, HttpClient};
use crate::rest::endpoint::Endpoint;
use crate::rest::query::QueryOptions;
use crate::rest::resources::Inventory;
use crate::rest::response::ApiResponse;

/// The inventory endpoint family.
#[derive(Clone, Debug)]
pub struct Inventories {
    /// The `inventory/items` sub-resource.
    pub items: Items,
}

impl Inventories {
    pub(crate) fn new(client: &HttpClient) -> Self {
        Self {
            items: Items::new(client),
        }
    }
}

/// The `inventory/items` endpoint.
#[derive(Clone, Debug)]
pub struct Items {
    endpoint: Endpoint,
}

impl Items {
    const PATH: &'static str = "inventory/items";
    const IN_PARAMS: &'static [&'static str] = &[
        "location_code",
        "location_id",
        "product_id",
        "sku",
        "variant_id",
    ];

    pub(crate) fn new(client: &HttpClient) -> Self {
        Self {
            endpoint: Endpoint::new(client.clone()),
        }
    }

    /// Lists inventory items matching `options`.
    ///
    /// Multi-value filters on location, product, SKU, and variant use the
    /// `:in` merge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses, [`Error::Parse`]
    /// for undecodable bodies, and [`Error::Network`] for transport
    /// failures.
    pub async fn get(&self, options: QueryOptions) -> Result<ApiResponse<Vec<Inventory>>, Error> {
        self.endpoint
            .get(Self::PATH, options.with_in_params(Self::IN_PARAMS))
            .await
    }
}
