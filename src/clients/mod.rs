//! Wire-level HTTP client for the Management API.
//!
//! This module provides the transport layer shared by every endpoint:
//! [`HttpClient`] issues authenticated requests, [`HttpRequest`] describes
//! a call, [`HttpResponse`]/[`ResponseHeaders`] expose the wire response,
//! and [`errors`] classifies failures. The typed resource layer on top
//! lives in [`crate::rest`].

pub mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{Error, ResponseError, UsageError};
pub use http_client::{HttpClient, CLIENT_VERSION, HOST};
pub use http_request::{HttpMethod, HttpRequest};
pub use http_response::{HttpResponse, ResponseBody, ResponseHeaders};
