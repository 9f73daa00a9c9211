//! # BigCommerce API Rust Client
//!
//! A Rust client for the BigCommerce Management API, providing typed
//! records for API resources, validated configuration, and an async
//! request/response pipeline with pagination and rate-limit metadata.
//!
//! ## Overview
//!
//! This crate provides:
//! - A root [`Client`] exposing the `customers`, `inventories`,
//!   `segments`, and `subscribers` endpoint families
//! - Typed records per resource ([`Customer`], [`Address`], [`Metafield`],
//!   [`Inventory`], [`Segment`], [`Subscriber`], ...)
//! - Filter encoding via [`QueryOptions`], including the `field:in`
//!   multi-value convention
//! - [`ApiResponse<T>`] collections carrying [`Meta`]/[`Pagination`] and
//!   rate-limit headers
//! - Fail-fast validated configuration via [`ClientConfig`],
//!   [`StoreHash`], and [`AuthToken`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bigcommerce_api::{Client, QueryOptions};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! // Both values are validated here; construction fails before any I/O
//! // when either is empty.
//! let client = Client::new("store-hash", "auth-token")?;
//!
//! // List customers filtered by id: one request, `id:in=1,2,3`.
//! let result = client
//!     .customers
//!     .get(QueryOptions::new().with("id", vec![1, 2, 3]))
//!     .await?;
//!
//! for customer in &result {
//!     println!("{:?} <{:?}>", customer.first_name, customer.email);
//! }
//!
//! // Pagination and rate-limit metadata ride along with the records.
//! if let Some(meta) = result.meta() {
//!     println!("pagination: {:?}", meta.pagination);
//! }
//! println!("requests left: {:?}", result.headers().requests_left());
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! All failures are synchronous to the call that raised them and classify
//! into one [`Error`] enum: configuration and usage errors surface before
//! any I/O, non-2xx responses become [`ResponseError`]s with the parsed
//! error payload, parse failures and transport failures stay distinct.
//! There are no automatic retries and no caching; every call is one
//! request.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and immutable
//! - **Fail-fast validation**: credentials validate on construction
//! - **Thread-safe**: all types are `Send + Sync`
//! - **Async-first**: designed for use with the Tokio runtime
//! - **Composition over inheritance**: endpoint families are
//!   configuration values over one shared pipeline

mod client;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use client::Client;
pub use clients::{Error, ResponseError, ResponseHeaders, UsageError};
pub use config::{ApiVersion, AuthToken, ClientConfig, ResourceFamily, StoreHash};
pub use error::ConfigError;
pub use rest::{
    ApiResponse, DeleteStyle, Meta, Pagination, PaginationLinks, QueryOptions, QueryValue,
};

// Re-export the typed records
pub use rest::resources::{
    Address, Attribute, AttributeValue, Customer, Inventory, InventoryIdentity, InventoryLocation,
    Metafield, Segment, StoreCreditAmount, Subscriber,
};
