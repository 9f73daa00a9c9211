//! The customers endpoint family.
//!
//! `Customers` owns the top-level `customers` resource plus its nested
//! sub-resources: [`Addresses`], [`Attributes`], [`AttributeValues`], and
//! [`Metafields`]. Each is configuration over the same shared pipeline:
//! a base path, the filter fields eligible for the `:in` merge, and the
//! delete style.
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{Client, QueryOptions};
//!
//! let client = Client::new("store-hash", "auth-token")?;
//!
//! // One request: DELETE /customers?id:in=1,5
//! client.customers.delete(&[1, 5]).await?;
//!
//! let result = client
//!     .customers
//!     .get(QueryOptions::new().with("email", "user1@example.com"))
//!     .await?;
//! ```

use crate::clients::{Error, HttpClient, UsageError};
use crate::rest::endpoint::{body_without, DeleteStyle, Endpoint};
use crate::rest::query::QueryOptions;
use crate::rest::resources::{Address, Attribute, AttributeValue, Customer, Metafield};
use crate::rest::response::ApiResponse;

/// The `customers` endpoint.
#[derive(Clone, Debug)]
pub struct Customers {
    endpoint: Endpoint,
    /// The `customers/addresses` sub-resource.
    pub addresses: Addresses,
    /// The `customers/attributes` sub-resource.
    pub attributes: Attributes,
    /// The `customers/attribute-values` sub-resource.
    pub attribute_values: AttributeValues,
    /// The `customers/{customer_id}/metafields` sub-resource.
    pub metafields: Metafields,
}

impl Customers {
    const PATH: &'static str = "customers";
    const IN_PARAMS: &'static [&'static str] = &[
        "company",
        "customer_group_id",
        "email",
        "id",
        "name",
        "registration_ip_address",
    ];
    const DELETE_STYLE: DeleteStyle = DeleteStyle::Query;

    pub(crate) fn new(client: &HttpClient) -> Self {
        Self {
            endpoint: Endpoint::new(client.clone()),
            addresses: Addresses::new(client),
            attributes: Attributes::new(client),
            attribute_values: AttributeValues::new(client),
            metafields: Metafields::new(client),
        }
    }

    /// Lists customers matching `options`.
    ///
    /// Multi-value filters on company, customer group, email, id, name,
    /// and registration IP use the `:in` merge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses, [`Error::Parse`]
    /// for undecodable bodies, and [`Error::Network`] for transport
    /// failures.
    pub async fn get(&self, options: QueryOptions) -> Result<ApiResponse<Vec<Customer>>, Error> {
        self.endpoint
            .get(Self::PATH, options.with_in_params(Self::IN_PARAMS))
            .await
    }

    /// Creates one or more customers in a single request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] when the API rejects any record (e.g.
    /// an invalid email); no customers are created in that case.
    pub async fn create(&self, customers: &[Customer]) -> Result<ApiResponse<Vec<Customer>>, Error> {
        self.endpoint.post(Self::PATH, customers).await
    }

    /// Updates one or more customers in a single request. Each record
    /// must carry its `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn update(&self, customers: &[Customer]) -> Result<ApiResponse<Vec<Customer>>, Error> {
        self.endpoint.put(Self::PATH, customers).await
    }

    /// Deletes the customers with the given ids in one request using the
    /// `id:in` convention, never one request per id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn delete(&self, ids: &[u64]) -> Result<ApiResponse<Vec<Customer>>, Error> {
        let options = QueryOptions::new()
            .with("id", ids.to_vec())
            .with_in_params(&["id"]);
        self.endpoint
            .delete(Self::PATH, options, Self::DELETE_STYLE)
            .await
    }
}

/// The `customers/addresses` endpoint.
#[derive(Clone, Debug)]
pub struct Addresses {
    endpoint: Endpoint,
}

impl Addresses {
    const PATH: &'static str = "customers/addresses";
    const IN_PARAMS: &'static [&'static str] = &["company", "customer_id", "id", "name"];
    const DELETE_STYLE: DeleteStyle = DeleteStyle::Query;

    pub(crate) fn new(client: &HttpClient) -> Self {
        Self {
            endpoint: Endpoint::new(client.clone()),
        }
    }

    /// Lists addresses matching `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn get(&self, options: QueryOptions) -> Result<ApiResponse<Vec<Address>>, Error> {
        self.endpoint
            .get(Self::PATH, options.with_in_params(Self::IN_PARAMS))
            .await
    }

    /// Creates one or more addresses in a single request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn create(&self, addresses: &[Address]) -> Result<ApiResponse<Vec<Address>>, Error> {
        self.endpoint.post(Self::PATH, addresses).await
    }

    /// Deletes the addresses with the given ids in one request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn delete(&self, ids: &[u64]) -> Result<ApiResponse<Vec<Address>>, Error> {
        let options = QueryOptions::new()
            .with("id", ids.to_vec())
            .with_in_params(&["id"]);
        self.endpoint
            .delete(Self::PATH, options, Self::DELETE_STYLE)
            .await
    }
}

/// The `customers/attributes` endpoint.
#[derive(Clone, Debug)]
pub struct Attributes {
    endpoint: Endpoint,
}

impl Attributes {
    const PATH: &'static str = "customers/attributes";
    const DELETE_STYLE: DeleteStyle = DeleteStyle::Query;

    pub(crate) fn new(client: &HttpClient) -> Self {
        Self {
            endpoint: Endpoint::new(client.clone()),
        }
    }

    /// Lists attribute definitions matching `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn get(&self, options: QueryOptions) -> Result<ApiResponse<Vec<Attribute>>, Error> {
        self.endpoint.get(Self::PATH, options).await
    }

    /// Creates one or more attribute definitions in a single request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn create(
        &self,
        attributes: &[Attribute],
    ) -> Result<ApiResponse<Vec<Attribute>>, Error> {
        self.endpoint.post(Self::PATH, attributes).await
    }

    /// Deletes the attribute definitions with the given ids in one
    /// request. Their values on all customers are removed with them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn delete(&self, ids: &[u64]) -> Result<ApiResponse<Vec<Attribute>>, Error> {
        let options = QueryOptions::new()
            .with("id", ids.to_vec())
            .with_in_params(&["id"]);
        self.endpoint
            .delete(Self::PATH, options, Self::DELETE_STYLE)
            .await
    }
}

/// The `customers/attribute-values` endpoint.
#[derive(Clone, Debug)]
pub struct AttributeValues {
    endpoint: Endpoint,
}

impl AttributeValues {
    const PATH: &'static str = "customers/attribute-values";
    const IN_PARAMS: &'static [&'static str] = &["attribute_id", "customer_id"];

    pub(crate) fn new(client: &HttpClient) -> Self {
        Self {
            endpoint: Endpoint::new(client.clone()),
        }
    }

    /// Lists attribute values matching `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn get(
        &self,
        options: QueryOptions,
    ) -> Result<ApiResponse<Vec<AttributeValue>>, Error> {
        self.endpoint
            .get(Self::PATH, options.with_in_params(Self::IN_PARAMS))
            .await
    }

    /// Inserts or updates one or more attribute values in a single
    /// request. The server matches on `(customer_id, attribute_id)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn upsert(
        &self,
        values: &[AttributeValue],
    ) -> Result<ApiResponse<Vec<AttributeValue>>, Error> {
        self.endpoint.put(Self::PATH, values).await
    }
}

/// The `customers/{customer_id}/metafields` endpoint.
#[derive(Clone, Debug)]
pub struct Metafields {
    endpoint: Endpoint,
}

impl Metafields {
    const RESOURCE: &'static str = "customer metafield";

    pub(crate) fn new(client: &HttpClient) -> Self {
        Self {
            endpoint: Endpoint::new(client.clone()),
        }
    }

    fn path(customer_id: u64) -> String {
        format!("customers/{customer_id}/metafields")
    }

    /// Lists the metafields of one customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn get(
        &self,
        customer_id: u64,
        options: QueryOptions,
    ) -> Result<ApiResponse<Vec<Metafield>>, Error> {
        self.endpoint.get(&Self::path(customer_id), options).await
    }

    /// Creates a metafield on the customer named by its `resource_id`.
    ///
    /// The `resource_id` routes the path and is stripped from the body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] before any I/O when `resource_id` is
    /// absent; [`Error::Response`] for non-2xx statuses.
    pub async fn create(&self, metafield: &Metafield) -> Result<ApiResponse<Vec<Metafield>>, Error> {
        let resource_id = metafield.resource_id.ok_or(UsageError::MissingField {
            operation: "create",
            resource: Self::RESOURCE,
            field: "resource_id",
        })?;

        let body = body_without(metafield, &["resource_id"])?;
        self.endpoint.post(&Self::path(resource_id), &body).await
    }

    /// Updates an existing metafield and returns the single updated
    /// record, or `None` if the server answered with an empty collection.
    ///
    /// Both `resource_id` and `id` are required on the input; both route
    /// the path and are stripped from the body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] before any I/O when `resource_id` or `id`
    /// is absent; [`Error::Response`] for non-2xx statuses.
    pub async fn update(
        &self,
        metafield: &Metafield,
    ) -> Result<Option<ApiResponse<Metafield>>, Error> {
        let resource_id = metafield.resource_id.ok_or(UsageError::MissingField {
            operation: "update",
            resource: Self::RESOURCE,
            field: "resource_id",
        })?;
        let id = metafield.id.ok_or(UsageError::MissingField {
            operation: "update",
            resource: Self::RESOURCE,
            field: "id",
        })?;

        let body = body_without(metafield, &["resource_id", "id"])?;
        let path = format!("{}/{id}", Self::path(resource_id));
        let result = self.endpoint.put::<Metafield, _>(&path, &body).await?;
        Ok(result.into_single())
    }
}
