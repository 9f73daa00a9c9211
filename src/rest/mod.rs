//! Typed resource layer for the Management API.
//!
//! This module provides:
//!
//! - **[`QueryOptions`]/[`QueryValue`]**: filter encoding, including the
//!   `field:in` multi-value merge
//! - **[`ApiResponse<T>`]**: typed collections with [`Meta`]/[`Pagination`]
//!   and response headers attached
//! - **`Endpoint`**: the shared pipeline every endpoint family holds by
//!   composition
//! - **Endpoint families**: [`Customers`], [`Inventories`], [`Segments`],
//!   [`Subscribers`], each pure configuration (path, `:in`-eligible
//!   fields, delete style) over the generic pipeline
//! - **[`resources`]**: the typed records themselves
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_api::{Client, QueryOptions};
//!
//! let client = Client::new("store-hash", "auth-token")?;
//!
//! let result = client
//!     .customers
//!     .get(QueryOptions::new().with("id", vec![1, 2, 3]))
//!     .await?;
//!
//! for customer in &result {
//!     println!("{:?} {:?}", customer.first_name, customer.email);
//! }
//! ```

pub(crate) mod endpoint;
mod query;
pub mod resources;
mod response;

mod customers;
mod inventories;
mod segments;
mod subscribers;

pub use customers::{Addresses, AttributeValues, Attributes, Customers, Metafields};
pub use endpoint::DeleteStyle;
pub use inventories::{Inventories, Items};
pub use query::{QueryOptions, QueryValue};
pub use response::{ApiResponse, Meta, Pagination, PaginationLinks};
pub use segments::Segments;
pub use subscribers::Subscribers;
