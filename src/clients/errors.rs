//! Error types for API calls.
//!
//! This module contains the crate-level [`Error`] enum and the specific
//! failure types it wraps:
//!
//! - [`ResponseError`]: non-2xx HTTP responses, with the parsed error
//!   payload and the response headers
//! - [`UsageError`]: caller-supplied input missing a required field,
//!   detected before any network I/O
//! - [`Error::Parse`]: a body that claims JSON but fails to parse
//! - [`Error::Network`]: transport/TLS failures from the underlying client
//!
//! # Example
//!
//! ```rust,ignore
//! match client.customers.get(options).await {
//!     Ok(result) => println!("{} customers", result.len()),
//!     Err(Error::Response(e)) => {
//!         println!("API rejected the call ({}): {}", e.status, e);
//!     }
//!     Err(Error::Network(e)) => println!("transport failure: {e}"),
//!     Err(e) => println!("other failure: {e}"),
//! }
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

use crate::clients::http_response::{HttpResponse, ResponseBody, ResponseHeaders};
use crate::error::ConfigError;

/// Error returned when the API answers with a non-2xx status.
///
/// Carries the HTTP status, the parsed error payload, and the response
/// headers (including the rate-limit counters and `x-request-id`). The
/// display message is derived from the payload:
///
/// - a non-empty `errors` map formats as `"field: message"` pairs joined
///   with `", "`, trailing periods stripped from each message;
/// - otherwise `"<title> (<status>)"`, with the title's trailing period
///   stripped.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ResponseError;
/// use bigcommerce_api::clients::{HttpResponse, ResponseBody, ResponseHeaders};
/// use serde_json::json;
///
/// let response = HttpResponse {
///     status: 404,
///     headers: ResponseHeaders::default(),
///     body: ResponseBody::Json(json!({"title": "Not found.", "status": 404, "errors": {}})),
/// };
///
/// let error = ResponseError::from_response(response);
/// assert_eq!(error.to_string(), "Not found (404)");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ResponseError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The `title` field of the error payload, if any.
    pub title: Option<String>,
    /// The `type` field of the error payload, if any.
    pub error_type: Option<String>,
    /// Per-field validation messages from the payload's `errors` map.
    pub errors: BTreeMap<String, String>,
    /// The formatted error message.
    pub message: String,
    /// The response headers, including rate-limit counters.
    pub headers: ResponseHeaders,
}

impl ResponseError {
    /// Classifies a non-2xx response into an error.
    ///
    /// The payload is either `{"errors": [{...}], ...}` (element 0 is the
    /// envelope) or a bare `{"status", "title", "type", "errors"}` object.
    /// Non-JSON bodies become the message verbatim.
    #[must_use]
    pub fn from_response(response: HttpResponse) -> Self {
        let HttpResponse {
            status,
            headers,
            body,
        } = response;

        match body {
            ResponseBody::Json(value) => {
                let envelope = match value.get("errors").and_then(serde_json::Value::as_array) {
                    Some(list) if !list.is_empty() => list[0].clone(),
                    _ => value,
                };

                let title = envelope
                    .get("title")
                    .and_then(serde_json::Value::as_str)
                    .map(ToString::to_string);
                let error_type = envelope
                    .get("type")
                    .and_then(serde_json::Value::as_str)
                    .map(ToString::to_string);
                let payload_status = envelope
                    .get("status")
                    .and_then(serde_json::Value::as_u64)
                    .and_then(|s| u16::try_from(s).ok())
                    .unwrap_or(status);

                let mut errors = BTreeMap::new();
                if let Some(map) = envelope.get("errors").and_then(serde_json::Value::as_object) {
                    for (field, message) in map {
                        let message = message
                            .as_str()
                            .map_or_else(|| message.to_string(), ToString::to_string);
                        errors.insert(field.clone(), message);
                    }
                }

                let message = Self::format_message(title.as_deref(), payload_status, &errors);

                Self {
                    status,
                    title,
                    error_type,
                    errors,
                    message,
                    headers,
                }
            }
            ResponseBody::Text(text) => Self {
                status,
                title: None,
                error_type: None,
                errors: BTreeMap::new(),
                message: text,
                headers,
            },
            ResponseBody::Empty => Self {
                status,
                title: None,
                error_type: None,
                errors: BTreeMap::new(),
                message: format!("HTTP {status}"),
                headers,
            },
        }
    }

    fn format_message(title: Option<&str>, status: u16, errors: &BTreeMap<String, String>) -> String {
        if errors.is_empty() {
            let title = title.unwrap_or("request failed").trim_end_matches('.');
            format!("{title} ({status})")
        } else {
            errors
                .iter()
                .map(|(field, message)| format!("{field}: {}", message.trim_end_matches('.')))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

/// Error raised when caller input is missing a required correlating field.
///
/// Raised synchronously, before any network I/O: a metafield without a
/// `resource_id` cannot be routed to a path, so the call never starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// A required field was absent from the input record.
    #[error("Cannot {operation} {resource}: given {resource} has no {field}")]
    MissingField {
        /// The operation that was attempted (e.g. "update").
        operation: &'static str,
        /// The resource the input describes (e.g. "customer metafield").
        resource: &'static str,
        /// The missing field (e.g. "resource_id").
        field: &'static str,
    },
}

/// Unified error type for all API operations.
///
/// All failures are synchronous to the call that triggered them; there are
/// no partial results and no automatic retries.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid client configuration, detected at construction.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid caller input, detected before any network I/O.
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// A non-2xx response from the API.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// A body that claims JSON content but fails to parse, or a typed
    /// operation that met an unexpected content type.
    #[error("{reason}")]
    Parse {
        /// What failed to parse and why.
        reason: String,
    },

    /// Network or TLS error from the underlying transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn error_from(status: u16, body: serde_json::Value) -> ResponseError {
        ResponseError::from_response(HttpResponse {
            status,
            headers: ResponseHeaders::default(),
            body: ResponseBody::Json(body),
        })
    }

    #[test]
    fn test_field_errors_format_as_joined_pairs() {
        let error = error_from(
            422,
            json!({"title": "Bad.", "status": 422, "errors": {"email": "invalid email."}}),
        );
        assert_eq!(error.to_string(), "email: invalid email");
        assert_eq!(error.status, 422);
        assert_eq!(error.title.as_deref(), Some("Bad."));
    }

    #[test]
    fn test_empty_errors_map_formats_title_and_status() {
        let error = error_from(404, json!({"title": "Not found.", "status": 404, "errors": {}}));
        assert_eq!(error.to_string(), "Not found (404)");
    }

    #[test]
    fn test_multiple_field_errors_join_with_comma() {
        let error = error_from(
            422,
            json!({"title": "Bad.", "status": 422, "errors": {
                "email": "invalid email.",
                "first_name": "required."
            }}),
        );
        // BTreeMap iteration is sorted by field name.
        assert_eq!(error.to_string(), "email: invalid email, first_name: required");
    }

    #[test]
    fn test_errors_array_takes_first_element() {
        let error = error_from(
            409,
            json!({"errors": [
                {"title": "Conflict.", "status": 409, "type": "conflict", "errors": {}},
                {"title": "Ignored.", "status": 400}
            ]}),
        );
        assert_eq!(error.to_string(), "Conflict (409)");
        assert_eq!(error.error_type.as_deref(), Some("conflict"));
    }

    #[test]
    fn test_payload_status_preferred_over_http_status_in_message() {
        let error = error_from(400, json!({"title": "Teapot.", "status": 418}));
        assert_eq!(error.to_string(), "Teapot (418)");
        assert_eq!(error.status, 400);
    }

    #[test]
    fn test_non_json_body_is_message_verbatim() {
        let error = ResponseError::from_response(HttpResponse {
            status: 503,
            headers: ResponseHeaders::default(),
            body: ResponseBody::Text("<html>Service Unavailable</html>".to_string()),
        });
        assert_eq!(error.to_string(), "<html>Service Unavailable</html>");
    }

    #[test]
    fn test_empty_body_reports_status() {
        let error = ResponseError::from_response(HttpResponse {
            status: 500,
            headers: ResponseHeaders::default(),
            body: ResponseBody::Empty,
        });
        assert_eq!(error.to_string(), "HTTP 500");
    }

    #[test]
    fn test_response_error_keeps_headers() {
        let mut raw = std::collections::HashMap::new();
        raw.insert("x-request-id".to_string(), "req-9".to_string());
        let error = ResponseError::from_response(HttpResponse {
            status: 429,
            headers: ResponseHeaders::new(raw),
            body: ResponseBody::Empty,
        });
        assert_eq!(error.headers.request_id(), Some("req-9"));
    }

    #[test]
    fn test_usage_error_message_names_the_missing_field() {
        let error = UsageError::MissingField {
            operation: "update",
            resource: "subscriber",
            field: "id",
        };
        assert_eq!(
            error.to_string(),
            "Cannot update subscriber: given subscriber has no id"
        );
    }

    #[test]
    fn test_error_variants_implement_std_error() {
        let usage: &dyn std::error::Error = &Error::Usage(UsageError::MissingField {
            operation: "create",
            resource: "customer metafield",
            field: "resource_id",
        });
        let _ = usage;

        let parse: &dyn std::error::Error = &Error::Parse {
            reason: "failed to parse response JSON: EOF".to_string(),
        };
        let _ = parse;
    }
}
