//! The segments endpoint.

use crate::clients::{Error, HttpClient};
use crate::rest::endpoint::{DeleteStyle, Endpoint};
use crate::rest::query::QueryOptions;
use crate::rest::resources::Segment;
use crate::rest::response::ApiResponse;

/// The `segments` endpoint.
#[derive(Clone, Debug)]
pub struct Segments {
    endpoint: Endpoint,
}

impl Segments {
    const PATH: &'static str = "segments";
    const IN_PARAMS: &'static [&'static str] = &["id"];
    const DELETE_STYLE: DeleteStyle = DeleteStyle::Query;

    pub(crate) fn new(client: &HttpClient) -> Self {
        Self {
            endpoint: Endpoint::new(client.clone()),
        }
    }

    /// Lists segments matching `options`. Multi-value id filters use the
    /// `:in` merge.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn get(&self, options: QueryOptions) -> Result<ApiResponse<Vec<Segment>>, Error> {
        self.endpoint
            .get(Self::PATH, options.with_in_params(Self::IN_PARAMS))
            .await
    }

    /// Creates one or more segments in a single request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn create(&self, segments: &[Segment]) -> Result<ApiResponse<Vec<Segment>>, Error> {
        self.endpoint.post(Self::PATH, segments).await
    }

    /// Updates one or more segments in a single request. Each record must
    /// carry its `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn update(&self, segments: &[Segment]) -> Result<ApiResponse<Vec<Segment>>, Error> {
        self.endpoint.put(Self::PATH, segments).await
    }

    /// Deletes the segments with the given UUIDs in one request using the
    /// `id:in` convention.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn delete(&self, ids: &[&str]) -> Result<ApiResponse<Vec<Segment>>, Error> {
        let options = QueryOptions::new()
            .with("id", ids.to_vec())
            .with_in_params(&["id"]);
        self.endpoint
            .delete(Self::PATH, options, Self::DELETE_STYLE)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_configuration() {
        assert_eq!(Segments::PATH, "segments");
        assert_eq!(Segments::IN_PARAMS, &["id"]);
        assert_eq!(Segments::DELETE_STYLE, DeleteStyle::Query);
    }
}
