//! HTTP retrieval of the raw item list payload

use crate::config::Config;
use crate::error::{NetworkError, Result};

use reqwest::Client;
use tracing::debug;
use url::Url;

/// Fetches the raw payload bytes from the configured endpoint
///
/// The fetcher performs exactly one GET per [`fetch`](Fetcher::fetch) call.
/// There is no retry and no backoff; a failed request surfaces as
/// [`NetworkError`] and the caller decides what to do next. Network I/O is
/// its only side effect — it holds no mutable state.
pub struct Fetcher {
    /// HTTP client, built once with the configured timeout
    client: Client,

    /// Parsed endpoint URL
    endpoint: Url,
}

impl Fetcher {
    /// Create a new fetcher for the configured endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid absolute URL or the
    /// HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint).map_err(NetworkError::from)?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("itemfeed/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(NetworkError::from)?;

        Ok(Self { client, endpoint })
    }

    /// The endpoint this fetcher targets
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the raw payload bytes
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError`] when the transport fails, the server answers
    /// with a non-success status, or the response body is empty.
    pub async fn fetch(&self) -> Result<Vec<u8>> {
        debug!(endpoint = %self.endpoint, "fetching item list");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(NetworkError::from)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::HttpStatus {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(NetworkError::from)?;
        if body.is_empty() {
            return Err(NetworkError::EmptyBody.into());
        }

        debug!(bytes = body.len(), "fetched payload");
        Ok(body.to_vec())
    }
}
