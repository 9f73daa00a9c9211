//! HTTP request types for the BigCommerce API client.
//!
//! This module provides the [`HttpRequest`] type used by the endpoint
//! pipeline to describe a call before it is issued.

use std::fmt;

use crate::rest::QueryOptions;

/// HTTP methods supported by the Management API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A request to be sent to the Management API.
///
/// The `path` is relative to the versioned store root
/// (`/stores/{store_hash}/v3/`). Query options are serialized onto the URL
/// for GET and DELETE; the body is serialized as JSON for POST, PUT, and
/// DELETE-with-body endpoints.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::{HttpMethod, HttpRequest};
/// use bigcommerce_api::QueryOptions;
///
/// let request = HttpRequest::new(HttpMethod::Get, "customers")
///     .with_query(QueryOptions::new().with("page", 2));
///
/// assert_eq!(request.path, "customers");
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The path relative to the versioned store root.
    pub path: String,
    /// Query options, serialized for GET and DELETE requests.
    pub query: QueryOptions,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a request with no query options and no body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryOptions::new(),
            body: None,
        }
    }

    /// Attaches query options.
    #[must_use]
    pub fn with_query(mut self, query: QueryOptions) -> Self {
        self.query = query;
        self
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}
