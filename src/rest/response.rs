//! Typed response wrapper and response metadata.
//!
//! Every endpoint operation returns an [`ApiResponse<T>`] combining the
//! decoded records with the envelope's [`Meta`] block and the response
//! headers. The wrapper implements `Deref` for transparent access to the
//! records.
//!
//! # Example
//!
//! ```rust,ignore
//! let result = client.customers.get(QueryOptions::new()).await?;
//!
//! for customer in result.iter() {
//!     println!("{:?}", customer.email);
//! }
//!
//! if let Some(pagination) = result.meta().and_then(|m| m.pagination.as_ref()) {
//!     println!("page {} of {}", pagination.current_page, pagination.total_pages);
//! }
//!
//! println!("requests left: {:?}", result.headers().requests_left());
//! ```

use std::ops::Deref;

use serde::Deserialize;

use crate::clients::ResponseHeaders;

/// Links to the previous, current, and next pages of a collection.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct PaginationLinks {
    /// Query fragment for the previous page, if any.
    pub previous: Option<String>,
    /// Query fragment for the current page.
    pub current: Option<String>,
    /// Query fragment for the next page, if any.
    pub next: Option<String>,
}

/// Pagination block from the response envelope's `meta` field.
///
/// Present only when the server paginates the collection.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Total records across all pages.
    #[serde(default)]
    pub total: u64,
    /// Records on this page.
    #[serde(default)]
    pub count: u64,
    /// Page size requested.
    #[serde(default)]
    pub per_page: u64,
    /// The current page number (1-indexed).
    #[serde(default)]
    pub current_page: u64,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u64,
    /// Page links, when the server includes them.
    pub links: Option<PaginationLinks>,
}

/// Summary information from the response envelope's `meta` field.
///
/// Bulk writes report `total`/`success`/`failed` counters; collection
/// reads report `pagination`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Meta {
    /// Pagination block, when the collection is paginated.
    pub pagination: Option<Pagination>,
    /// Total records affected by a bulk operation.
    pub total: Option<u64>,
    /// Records successfully processed by a bulk operation.
    pub success: Option<u64>,
    /// Records that failed in a bulk operation.
    pub failed: Option<u64>,
}

/// A typed response from an endpoint operation.
///
/// Collection operations produce `ApiResponse<Vec<T>>`; the
/// [`into_single`](ApiResponse::into_single) unwrap reduces one to
/// `Option<ApiResponse<T>>`, moving `meta` and `headers` onto the single
/// record's response rather than mutating the record itself.
///
/// The wrapper implements `Deref<Target = T>`, so collection responses can
/// be iterated and indexed like the `Vec` they hold.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::{ApiResponse, ResponseHeaders};
///
/// let response = ApiResponse::new(vec!["a", "b"], None, ResponseHeaders::default());
/// assert_eq!(response.len(), 2);
/// assert_eq!(response[0], "a");
///
/// let single = response.into_single().unwrap();
/// assert_eq!(*single.data(), "a");
/// ```
#[derive(Clone, Debug)]
pub struct ApiResponse<T> {
    data: T,
    meta: Option<Meta>,
    headers: ResponseHeaders,
}

// Verify ApiResponse is Send + Sync when T is Send + Sync
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiResponse<String>>();
    assert_send_sync::<ApiResponse<Vec<String>>>();
};

impl<T> ApiResponse<T> {
    /// Creates a response from decoded data, envelope meta, and headers.
    #[must_use]
    pub const fn new(data: T, meta: Option<Meta>, headers: ResponseHeaders) -> Self {
        Self {
            data,
            meta,
            headers,
        }
    }

    /// Returns a reference to the decoded data.
    ///
    /// In most cases `Deref` coercion makes this call unnecessary.
    #[must_use]
    pub const fn data(&self) -> &T {
        &self.data
    }

    /// Consumes the response and returns the decoded data.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Returns the envelope's `meta` block, if the server sent one.
    #[must_use]
    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// Returns the response headers.
    #[must_use]
    pub const fn headers(&self) -> &ResponseHeaders {
        &self.headers
    }

    /// Maps the decoded data to a new type, preserving meta and headers.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            data: f(self.data),
            meta: self.meta,
            headers: self.headers,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Unwraps a collection response into its first record.
    ///
    /// Returns `None` for an empty collection: an explicit "no result",
    /// not an error. For a non-empty collection the returned response
    /// carries this collection's `meta` and `headers`.
    #[must_use]
    pub fn into_single(self) -> Option<ApiResponse<T>> {
        let Self {
            data,
            meta,
            headers,
        } = self;
        data.into_iter()
            .next()
            .map(|record| ApiResponse::new(record, meta, headers))
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T> IntoIterator for ApiResponse<Vec<T>> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ApiResponse<Vec<T>> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    fn headers_with_request_id(id: &str) -> ResponseHeaders {
        let mut raw = HashMap::new();
        raw.insert("x-request-id".to_string(), id.to_string());
        ResponseHeaders::new(raw)
    }

    #[test]
    fn test_pagination_block_parses_field_for_field() {
        let pagination: Pagination = serde_json::from_value(json!({
            "total": 5,
            "count": 2,
            "per_page": 2,
            "current_page": 2,
            "total_pages": 3
        }))
        .unwrap();

        assert_eq!(pagination.total, 5);
        assert_eq!(pagination.count, 2);
        assert_eq!(pagination.per_page, 2);
        assert_eq!(pagination.current_page, 2);
        assert_eq!(pagination.total_pages, 3);
        assert!(pagination.links.is_none());
    }

    #[test]
    fn test_pagination_links_parse() {
        let pagination: Pagination = serde_json::from_value(json!({
            "total": 10,
            "count": 5,
            "per_page": 5,
            "current_page": 1,
            "total_pages": 2,
            "links": {"current": "?page=1&limit=5", "next": "?page=2&limit=5"}
        }))
        .unwrap();

        let links = pagination.links.unwrap();
        assert_eq!(links.next.as_deref(), Some("?page=2&limit=5"));
        assert!(links.previous.is_none());
    }

    #[test]
    fn test_meta_parses_bulk_counters() {
        let meta: Meta = serde_json::from_value(json!({
            "total": 3, "success": 2, "failed": 1
        }))
        .unwrap();

        assert_eq!(meta.total, Some(3));
        assert_eq!(meta.success, Some(2));
        assert_eq!(meta.failed, Some(1));
        assert!(meta.pagination.is_none());
    }

    #[test]
    fn test_deref_allows_collection_access() {
        let response = ApiResponse::new(vec![1, 2, 3], None, ResponseHeaders::default());
        assert_eq!(response.len(), 3);
        assert_eq!(response.first(), Some(&1));
    }

    #[test]
    fn test_into_single_on_empty_collection_is_none() {
        let response: ApiResponse<Vec<i32>> =
            ApiResponse::new(vec![], None, headers_with_request_id("req-1"));
        assert!(response.into_single().is_none());
    }

    #[test]
    fn test_into_single_carries_meta_and_headers() {
        let meta = Meta {
            total: Some(1),
            ..Meta::default()
        };
        let response = ApiResponse::new(
            vec!["only"],
            Some(meta.clone()),
            headers_with_request_id("req-2"),
        );

        let single = response.into_single().unwrap();
        assert_eq!(*single.data(), "only");
        assert_eq!(single.meta(), Some(&meta));
        assert_eq!(single.headers().request_id(), Some("req-2"));
    }

    #[test]
    fn test_iteration_over_collection_response() {
        let response = ApiResponse::new(vec![10, 20], None, ResponseHeaders::default());

        let borrowed: Vec<i32> = (&response).into_iter().copied().collect();
        assert_eq!(borrowed, vec![10, 20]);

        let owned: Vec<i32> = response.into_iter().collect();
        assert_eq!(owned, vec![10, 20]);
    }

    #[test]
    fn test_map_preserves_meta_and_headers() {
        let response = ApiResponse::new(vec![1, 2], None, headers_with_request_id("req-3"));
        let mapped = response.map(|data| data.len());
        assert_eq!(*mapped.data(), 2);
        assert_eq!(mapped.headers().request_id(), Some("req-3"));
    }
}
