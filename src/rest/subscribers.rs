//! The subscribers endpoint.

use crate::clients::{Error, HttpClient, UsageError};
use crate::rest::endpoint::{body_without, DeleteStyle, Endpoint};
use crate::rest::query::QueryOptions;
use crate::rest::resources::Subscriber;
use crate::rest::response::ApiResponse;

/// The `customers/subscribers` endpoint.
#[derive(Clone, Debug)]
pub struct Subscribers {
    endpoint: Endpoint,
}

impl Subscribers {
    const PATH: &'static str = "customers/subscribers";
    const IN_PARAMS: &'static [&'static str] = &[
        "date_created",
        "date_modified",
        "email",
        "first_name",
        "id",
        "last_name",
        "order_id",
        "source",
    ];
    const DELETE_STYLE: DeleteStyle = DeleteStyle::Query;

    pub(crate) fn new(client: &HttpClient) -> Self {
        Self {
            endpoint: Endpoint::new(client.clone()),
        }
    }

    /// Lists subscribers matching `options`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses, [`Error::Parse`]
    /// for undecodable bodies, and [`Error::Network`] for transport
    /// failures.
    pub async fn get(&self, options: QueryOptions) -> Result<ApiResponse<Vec<Subscriber>>, Error> {
        self.endpoint
            .get(Self::PATH, options.with_in_params(Self::IN_PARAMS))
            .await
    }

    /// Finds a single subscriber by id. Returns `None` when the server
    /// answers with an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses (a missing id is
    /// a 404 from the API, not `None`).
    pub async fn find(&self, id: u64) -> Result<Option<ApiResponse<Subscriber>>, Error> {
        let path = format!("{}/{id}", Self::PATH);
        let result = self
            .endpoint
            .get::<Subscriber>(&path, QueryOptions::new())
            .await?;
        Ok(result.into_single())
    }

    /// Creates a subscriber and returns the single created record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses (e.g. 422 when the
    /// email is already subscribed).
    pub async fn create(
        &self,
        subscriber: &Subscriber,
    ) -> Result<Option<ApiResponse<Subscriber>>, Error> {
        let result = self
            .endpoint
            .post::<Subscriber, _>(Self::PATH, subscriber)
            .await?;
        Ok(result.into_single())
    }

    /// Updates a subscriber and returns the single updated record. The
    /// input must carry its `id`, which routes the path and is stripped
    /// from the body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Usage`] before any I/O when `id` is absent;
    /// [`Error::Response`] for non-2xx statuses.
    pub async fn update(
        &self,
        subscriber: &Subscriber,
    ) -> Result<Option<ApiResponse<Subscriber>>, Error> {
        let id = subscriber.id.ok_or(UsageError::MissingField {
            operation: "update",
            resource: "subscriber",
            field: "id",
        })?;

        let body = body_without(subscriber, &["id"])?;
        let path = format!("{}/{id}", Self::PATH);
        let result = self.endpoint.put::<Subscriber, _>(&path, &body).await?;
        Ok(result.into_single())
    }

    /// Deletes the subscribers matching `options` in one request, with
    /// the same `:in`-eligible fields as [`get`](Self::get).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Response`] for non-2xx statuses.
    pub async fn delete(&self, options: QueryOptions) -> Result<ApiResponse<Vec<Subscriber>>, Error> {
        self.endpoint
            .delete(
                Self::PATH,
                options.with_in_params(Self::IN_PARAMS),
                Self::DELETE_STYLE,
            )
            .await
    }
}
