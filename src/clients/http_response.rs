//! HTTP response types for the BigCommerce API client.
//!
//! This module provides [`HttpResponse`], the wire-level response consumed
//! by the endpoint pipeline, and [`ResponseHeaders`], the read-only view
//! over response headers that surfaces the request id and rate-limit
//! counters.

use std::collections::HashMap;

/// A read-only view over response headers.
///
/// Header names are lowercased; when a header arrives more than once only
/// the first value is kept. The rate-limit accessors are best-effort
/// integer parses: a missing or unparsable header yields `None`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ResponseHeaders;
/// use std::collections::HashMap;
///
/// let mut raw = HashMap::new();
/// raw.insert("x-rate-limit-requests-left".to_string(), "149".to_string());
///
/// let headers = ResponseHeaders::new(raw);
/// assert_eq!(headers.requests_left(), Some(149));
/// assert_eq!(headers.requests_quota(), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseHeaders {
    raw: HashMap<String, String>,
}

impl ResponseHeaders {
    /// Creates a view over the given header map. Names are lowercased.
    #[must_use]
    pub fn new(raw: HashMap<String, String>) -> Self {
        let raw = raw
            .into_iter()
            .map(|(name, value)| (name.to_lowercase(), value))
            .collect();
        Self { raw }
    }

    /// Builds a view from a reqwest header map, keeping the first value of
    /// each header.
    #[must_use]
    pub(crate) fn from_header_map(headers: &reqwest::header::HeaderMap) -> Self {
        let mut raw = HashMap::new();
        for (name, value) in headers {
            let name = name.as_str().to_lowercase();
            if let Ok(value) = value.to_str() {
                raw.entry(name).or_insert_with(|| value.to_string());
            }
        }
        Self { raw }
    }

    /// Returns the raw value of a header by (case-insensitive) name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.raw.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Returns the `x-request-id` header value, if present.
    ///
    /// This id is useful for debugging and should be included in error
    /// reports to BigCommerce support.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.get("x-request-id")
    }

    /// Requests remaining in the current rate-limit window
    /// (`x-rate-limit-requests-left`).
    #[must_use]
    pub fn requests_left(&self) -> Option<u64> {
        self.int_header("x-rate-limit-requests-left")
    }

    /// Milliseconds until the rate-limit window resets
    /// (`x-rate-limit-time-reset-ms`).
    #[must_use]
    pub fn time_reset_ms(&self) -> Option<u64> {
        self.int_header("x-rate-limit-time-reset-ms")
    }

    /// Total requests allowed per window (`x-rate-limit-requests-quota`).
    #[must_use]
    pub fn requests_quota(&self) -> Option<u64> {
        self.int_header("x-rate-limit-requests-quota")
    }

    /// Length of the rate-limit window in milliseconds
    /// (`x-rate-limit-time-window-ms`).
    #[must_use]
    pub fn time_window_ms(&self) -> Option<u64> {
        self.int_header("x-rate-limit-time-window-ms")
    }

    fn int_header(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(|value| value.parse().ok())
    }
}

/// The body of a wire-level response.
///
/// JSON is parsed only when the content type is `application/json` or
/// `application/problem+json`; other content types pass through as opaque
/// text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseBody {
    /// No body (e.g. HTTP 204).
    Empty,
    /// A parsed JSON body.
    Json(serde_json::Value),
    /// An opaque non-JSON body.
    Text(String),
}

/// A wire-level response from the Management API.
///
/// Only 2xx responses reach callers as `HttpResponse`; anything else is
/// classified into an error by the client before it is returned.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: ResponseHeaders,
    /// The response body.
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers_with(name: &str, value: &str) -> ResponseHeaders {
        let mut raw = HashMap::new();
        raw.insert(name.to_string(), value.to_string());
        ResponseHeaders::new(raw)
    }

    #[test]
    fn test_is_ok_for_2xx_only() {
        for status in [200, 201, 204, 299] {
            let response = HttpResponse {
                status,
                headers: ResponseHeaders::default(),
                body: ResponseBody::Empty,
            };
            assert!(response.is_ok(), "expected is_ok() for status {status}");
        }

        for status in [199, 301, 404, 422, 500] {
            let response = HttpResponse {
                status,
                headers: ResponseHeaders::default(),
                body: ResponseBody::Json(json!({})),
            };
            assert!(!response.is_ok(), "expected !is_ok() for status {status}");
        }
    }

    #[test]
    fn test_request_id_extraction() {
        let headers = headers_with("X-Request-Id", "abc-123");
        assert_eq!(headers.request_id(), Some("abc-123"));
    }

    #[test]
    fn test_rate_limit_headers_parse_as_integers() {
        let mut raw = HashMap::new();
        raw.insert("x-rate-limit-requests-left".to_string(), "149".to_string());
        raw.insert("x-rate-limit-time-reset-ms".to_string(), "12000".to_string());
        raw.insert("x-rate-limit-requests-quota".to_string(), "150".to_string());
        raw.insert("x-rate-limit-time-window-ms".to_string(), "30000".to_string());
        let headers = ResponseHeaders::new(raw);

        assert_eq!(headers.requests_left(), Some(149));
        assert_eq!(headers.time_reset_ms(), Some(12000));
        assert_eq!(headers.requests_quota(), Some(150));
        assert_eq!(headers.time_window_ms(), Some(30000));
    }

    #[test]
    fn test_missing_headers_yield_none() {
        let headers = ResponseHeaders::default();
        assert_eq!(headers.request_id(), None);
        assert_eq!(headers.requests_left(), None);
        assert_eq!(headers.time_reset_ms(), None);
        assert_eq!(headers.requests_quota(), None);
        assert_eq!(headers.time_window_ms(), None);
    }

    #[test]
    fn test_unparsable_counter_yields_none() {
        let headers = headers_with("x-rate-limit-requests-left", "unlimited");
        assert_eq!(headers.requests_left(), None);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let headers = headers_with("Content-Type", "application/json");
        assert_eq!(headers.get("content-type"), Some("application/json"));
        assert_eq!(headers.get("CONTENT-TYPE"), Some("application/json"));
    }
}
