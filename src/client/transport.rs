use std::future::Future;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::dto::api::{AdvocatesQuery, AdvocatesResponse, FilterOptionsResponse};

#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, abort at the
    /// socket level, body decode).
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server returned status {0}")]
    Status(u16),

    /// The query parameters could not be encoded into a query string.
    #[error("invalid query parameters: {0}")]
    Encode(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Network(err.to_string())
    }
}

/// The HTTP seam of the search client.
///
/// Implementations perform one fetch per call and report failures through
/// [`TransportError`]; cancellation is handled above this seam by dropping
/// the returned future.
pub trait SearchTransport: Send + Sync + 'static {
    fn fetch_advocates(
        &self,
        query: AdvocatesQuery,
    ) -> impl Future<Output = Result<AdvocatesResponse, TransportError>> + Send;

    fn fetch_filter_options(
        &self,
    ) -> impl Future<Output = Result<FilterOptionsResponse, TransportError>> + Send;
}

/// [`SearchTransport`] backed by reqwest against a directory server.
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<D: DeserializeOwned>(&self, path_and_query: &str) -> Result<D, TransportError> {
        let url = format!("{}{path_and_query}", self.base_url.trim_end_matches('/'));
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(response.json::<D>().await?)
    }
}

impl SearchTransport for HttpTransport {
    async fn fetch_advocates(
        &self,
        query: AdvocatesQuery,
    ) -> Result<AdvocatesResponse, TransportError> {
        // Repeated `degrees`/`specialties` keys, same wire shape the server
        // parses.
        let params = serde_html_form::to_string(&query)
            .map_err(|e| TransportError::Encode(e.to_string()))?;
        self.get_json(&format!("/api/advocates?{params}")).await
    }

    async fn fetch_filter_options(&self) -> Result<FilterOptionsResponse, TransportError> {
        self.get_json("/api/advocates/filters").await
    }
}
