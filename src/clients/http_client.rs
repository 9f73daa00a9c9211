//! HTTP client for BigCommerce Management API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! requests against the versioned store root. It owns URL construction,
//! default headers, body serialization, and the classification of non-2xx
//! responses into [`ResponseError`]s.

use std::collections::HashMap;

use crate::clients::errors::{Error, ResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{HttpResponse, ResponseBody, ResponseHeaders};
use crate::config::{ApiVersion, ClientConfig, StoreHash};

/// The production API host. Every request goes here unless the
/// configuration overrides the origin.
pub const HOST: &str = "api.bigcommerce.com";

/// Client version from Cargo.toml, embedded in the user agent.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Management API.
///
/// The client handles:
/// - Path construction (`/stores/{store_hash}/v{N}/{resource_path}`)
/// - Query-string serialization for GET and DELETE requests
/// - Default headers including `User-Agent` and `X-Auth-Token`
/// - JSON body serialization for POST/PUT (and DELETE-with-body)
/// - Classification of non-2xx responses
///
/// The client performs exactly one attempt per call: no retries, no
/// backoff, no caching. Callers wanting resiliency wrap calls externally.
///
/// # Thread Safety
///
/// `HttpClient` holds only immutable configuration after construction and
/// is `Send + Sync`, so it is safe to share across async tasks.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base origin (e.g. `https://api.bigcommerce.com`).
    base_uri: String,
    /// The store every path is scoped to.
    store_hash: StoreHash,
    /// The API version segment used in paths.
    api_version: ApiVersion,
    /// Headers attached to every request.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g. TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        let base_uri = config
            .api_host()
            .map_or_else(|| format!("https://{HOST}"), ToString::to_string);

        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("BigCommerce Management API Client v{CLIENT_VERSION} (Rust {rust_version})");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Auth-Token".to_string(),
            config.auth_token().as_ref().to_string(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            store_hash: config.store_hash().clone(),
            api_version: config.api_version(),
            default_headers,
        }
    }

    /// Returns the base origin for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the API version this client targets.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the headers attached to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and returns the 2xx response.
    ///
    /// Query options are appended for GET and DELETE requests only; a body
    /// sets `Content-Type: application/json`. The response body is parsed
    /// as JSON when the content type is `application/json` or
    /// `application/problem+json`, and kept as opaque text otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses, [`Error::Parse`]
    /// when a JSON-typed body fails to parse, and [`Error::Network`] for
    /// transport failures. The connection is consumed within the call on
    /// every exit path.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, Error> {
        let mut url = format!(
            "{}/stores/{}/{}/{}",
            self.base_uri,
            self.store_hash,
            self.api_version.path_segment(),
            request.path
        );

        if matches!(request.method, HttpMethod::Get | HttpMethod::Delete)
            && !request.query.is_empty()
        {
            url.push_str(&request.query.to_query_string());
        }

        tracing::debug!(method = %request.method, url = %url, "issuing request");

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (name, value) in &self.default_headers {
            builder = builder.header(name, value);
        }

        if let Some(body) = &request.body {
            let payload = serde_json::to_string(body).map_err(|e| Error::Parse {
                reason: format!("failed to serialize request body: {e}"),
            })?;
            builder = builder
                .header("Content-Type", "application/json")
                .body(payload);
        }

        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers = ResponseHeaders::from_header_map(response.headers());
        let text = response.text().await?;

        let body = if text.is_empty() {
            ResponseBody::Empty
        } else if is_json_content_type(headers.get("content-type")) {
            serde_json::from_str(&text)
                .map(ResponseBody::Json)
                .map_err(|e| Error::Parse {
                    reason: format!("failed to parse response JSON: {e}"),
                })?
        } else {
            ResponseBody::Text(text)
        };

        let response = HttpResponse {
            status,
            headers,
            body,
        };

        if !response.is_ok() {
            tracing::debug!(status, "request rejected");
            return Err(ResponseError::from_response(response).into());
        }

        Ok(response)
    }
}

/// Returns `true` for the content types whose bodies parse as JSON.
fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type
        .map(|value| value.split(';').next().unwrap_or(value).trim())
        .is_some_and(|media| media == "application/json" || media == "application/problem+json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ClientConfig {
        ClientConfig::new("abc123", "test-access-token").unwrap()
    }

    #[test]
    fn test_client_defaults_to_production_host() {
        let client = HttpClient::new(&test_config());
        assert_eq!(client.base_uri(), "https://api.bigcommerce.com");
    }

    #[test]
    fn test_client_respects_api_host_override() {
        let config = test_config().with_api_host("http://127.0.0.1:9090");
        let client = HttpClient::new(&config);
        assert_eq!(client.base_uri(), "http://127.0.0.1:9090");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&test_config());
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("BigCommerce Management API Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_auth_token_header_injection() {
        let client = HttpClient::new(&test_config());
        assert_eq!(
            client.default_headers().get("X-Auth-Token"),
            Some(&"test-access-token".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(&test_config());
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }

    #[test]
    fn test_json_content_type_detection() {
        assert!(is_json_content_type(Some("application/json")));
        assert!(is_json_content_type(Some("application/json; charset=utf-8")));
        assert!(is_json_content_type(Some("application/problem+json")));
        assert!(!is_json_content_type(Some("text/html")));
        assert!(!is_json_content_type(None));
    }
}
