//! The shared request/response pipeline endpoints are built from.
//!
//! Endpoint families ([`crate::rest::Customers`],
//! [`crate::rest::Segments`], ...) are configuration: a base path, the
//! filter fields eligible for the `:in` merge, and a [`DeleteStyle`].
//! The behavior lives here: [`Endpoint`] issues the call and decodes the
//! `{ "data": ..., "meta": ... }` envelope into a typed
//! [`ApiResponse<Vec<T>>`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::{Error, HttpClient, HttpMethod, HttpRequest, HttpResponse, ResponseBody};
use crate::rest::query::QueryOptions;
use crate::rest::response::{ApiResponse, Meta};

/// How an endpoint transmits bulk-delete criteria.
///
/// Current (V3) endpoints encode criteria in the query string; one earlier
/// API revision sent them as a JSON body instead. The flag is explicit per
/// endpoint rather than inferred from the version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeleteStyle {
    /// Criteria encoded into the query string (V3 behavior).
    #[default]
    Query,
    /// Criteria serialized as a JSON request body.
    Body,
}

/// The generic pipeline shared by every endpoint family.
///
/// Holds the wire client by composition; endpoint structs own an
/// `Endpoint` value each, so the whole resource tree is cheap to clone
/// and free of shared mutable state.
#[derive(Clone, Debug)]
pub struct Endpoint {
    client: HttpClient,
}

impl Endpoint {
    pub(crate) const fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// GET `path`, with `options` encoded into the query string.
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: QueryOptions,
    ) -> Result<ApiResponse<Vec<T>>, Error> {
        let request = HttpRequest::new(HttpMethod::Get, path).with_query(options);
        decode(self.client.request(request).await?)
    }

    /// POST `body` to `path`. Empty payloads send no body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<Vec<T>>, Error> {
        self.write(HttpMethod::Post, path, body).await
    }

    /// PUT `body` to `path`. Empty payloads send no body.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<Vec<T>>, Error> {
        self.write(HttpMethod::Put, path, body).await
    }

    /// DELETE `path`, transmitting `options` per the endpoint's style.
    pub(crate) async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: QueryOptions,
        style: DeleteStyle,
    ) -> Result<ApiResponse<Vec<T>>, Error> {
        let request = match style {
            DeleteStyle::Query => HttpRequest::new(HttpMethod::Delete, path).with_query(options),
            DeleteStyle::Body => {
                let request = HttpRequest::new(HttpMethod::Delete, path);
                if options.is_empty() {
                    request
                } else {
                    request.with_body(options_to_json(&options))
                }
            }
        };
        decode(self.client.request(request).await?)
    }

    async fn write<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse<Vec<T>>, Error> {
        let value = serde_json::to_value(body).map_err(|e| Error::Parse {
            reason: format!("failed to serialize request body: {e}"),
        })?;

        let request = HttpRequest::new(method, path);
        let request = if payload_is_empty(&value) {
            request
        } else {
            request.with_body(value)
        };

        decode(self.client.request(request).await?)
    }
}

/// The `{ "data": ..., "meta": ... }` response envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Option<serde_json::Value>,
    meta: Option<Meta>,
}

/// Decodes a 2xx wire response into a typed collection.
///
/// An empty body yields an empty collection that still carries the
/// response headers. A JSON body is unwrapped from the envelope: an array
/// maps element-wise through `T`, a single object becomes a one-element
/// collection, and an absent or null `data` field yields an empty one.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<ApiResponse<Vec<T>>, Error> {
    let HttpResponse { headers, body, .. } = response;

    match body {
        ResponseBody::Empty => Ok(ApiResponse::new(Vec::new(), None, headers)),
        ResponseBody::Json(value) => {
            let envelope: Envelope = serde_json::from_value(value).map_err(|e| Error::Parse {
                reason: format!("failed to decode response envelope: {e}"),
            })?;

            let records = match envelope.data {
                None | Some(serde_json::Value::Null) => Vec::new(),
                Some(serde_json::Value::Array(items)) => items
                    .into_iter()
                    .map(|item| {
                        serde_json::from_value(item).map_err(|e| Error::Parse {
                            reason: format!("failed to decode record: {e}"),
                        })
                    })
                    .collect::<Result<Vec<T>, Error>>()?,
                Some(single) => vec![serde_json::from_value(single).map_err(|e| Error::Parse {
                    reason: format!("failed to decode record: {e}"),
                })?],
            };

            Ok(ApiResponse::new(records, envelope.meta, headers))
        }
        ResponseBody::Text(_) => Err(Error::Parse {
            reason: "expected a JSON response body, got a non-JSON content type".to_string(),
        }),
    }
}

/// Serializes a record to its JSON body with the named fields removed.
///
/// Used where a field (e.g. a metafield's `resource_id`) routes the
/// request path and must not also appear in the body.
pub(crate) fn body_without<B: Serialize>(
    record: &B,
    fields: &[&str],
) -> Result<serde_json::Value, Error> {
    let mut value = serde_json::to_value(record).map_err(|e| Error::Parse {
        reason: format!("failed to serialize request body: {e}"),
    })?;
    if let Some(map) = value.as_object_mut() {
        for field in fields {
            map.remove(*field);
        }
    }
    Ok(value)
}

/// Renders query options as a flat JSON object (DELETE-with-body style).
fn options_to_json(options: &QueryOptions) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (name, value) in options.iter() {
        map.insert(name.to_string(), serde_json::Value::String(value.render()));
    }
    serde_json::Value::Object(map)
}

/// Returns `true` for payloads that should not be sent as a body.
fn payload_is_empty(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => true,
        serde_json::Value::Array(items) => items.is_empty(),
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
