//! HTTP client for the collection endpoints

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Client;

use crate::config::RendererConfig;
use crate::envelope::Envelope;
use crate::error::Error;
use crate::error::TransportError;
use crate::model::ListKind;
use crate::model::ListRecord;
use crate::model::Room;

/// Client for the reservation backend's list endpoints.
///
/// This client is cheap to clone (uses `Arc` internally). Each fetch issues
/// exactly one GET with no retry.
///
/// # Example
///
/// ```ignore
/// use salas_lib::ListClient;
///
/// let client = ListClient::builder()
///     .url("http://localhost:5000/api")
///     .build()?;
///
/// let rooms = client.rooms().await?;
/// ```
#[derive(Clone)]
pub struct ListClient {
    inner: Arc<ListClientInner>,
}

struct ListClientInner {
    base_url: String,
    timeout: Option<Duration>,
    http_client: Client,
}

impl ListClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ListClientBuilder<Missing> {
        ListClientBuilder::new()
    }

    /// Builds a client from an existing configuration.
    pub fn from_config(config: RendererConfig) -> Result<Self, Error> {
        let mut builder = Self::builder().url(config.base_url);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }

    /// Returns the base URL of the backend.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the per-request timeout, if one is set.
    pub fn timeout(&self) -> Option<Duration> {
        self.inner.timeout
    }

    /// Returns the full URL of the collection endpoint for `kind`.
    pub fn endpoint(&self, kind: ListKind) -> String {
        format!("{}/{}", self.inner.base_url.trim_end_matches('/'), kind.path())
    }

    /// Fetches and decodes the whole collection for `R`.
    ///
    /// Fails with [`TransportError`] on connection failures and non-2xx
    /// statuses, and with a [`ProtocolError`](crate::error::ProtocolError)
    /// when the envelope is unsuccessful or malformed. A successful empty
    /// collection is `Ok(vec![])`.
    pub async fn fetch<R: ListRecord>(&self) -> Result<Vec<R>, Error> {
        let body = self.fetch_body(R::KIND).await?;
        let records = Envelope::from_slice(&body)?.into_records::<R>()?;
        debug!("received {} {}", records.len(), R::KIND);
        Ok(records)
    }

    /// Fetches `GET {base}/salas`.
    pub async fn rooms(&self) -> Result<Vec<Room>, Error> {
        self.fetch().await
    }

    async fn fetch_body(&self, kind: ListKind) -> Result<Vec<u8>, TransportError> {
        let url = self.endpoint(kind);
        debug!("GET {}", url);

        let mut request = self.inner.http_client.get(&url);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("GET {} failed with {}: {}", url, status, body);
            return Err(TransportError::status(status.as_u16(), body));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`ListClient`].
///
/// The base URL is required; [`ListClientBuilder::build`] only exists once
/// it has been set.
pub struct ListClientBuilder<Url> {
    url: Url,
    timeout: Option<Duration>,
}

impl ListClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
        }
    }

    /// Sets the backend base URL, e.g. `http://localhost:5000/api`.
    pub fn url(self, url: impl Into<String>) -> ListClientBuilder<Set<String>> {
        ListClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
        }
    }
}

impl Default for ListClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> ListClientBuilder<U> {
    /// Sets the request timeout. Unset means wait indefinitely.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl ListClientBuilder<Set<String>> {
    /// Builds the [`ListClient`], validating the base URL.
    pub fn build(self) -> Result<ListClient, Error> {
        let base_url = self.url.0;
        let parsed = url::Url::parse(&base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(Error::InvalidUrl(base_url));
        }

        let http_client = Client::builder().build().map_err(Error::HttpClient)?;

        Ok(ListClient {
            inner: Arc::new(ListClientInner {
                base_url,
                timeout: self.timeout,
                http_client,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rejects_relative_url() {
        let result = ListClient::builder().url("/api").build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_build_rejects_non_base_url() {
        let result = ListClient::builder().url("mailto:admin@ucu.edu.uy").build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_from_config_keeps_settings() {
        let config = RendererConfig::new("http://localhost:5000/api")
            .with_timeout(Duration::from_secs(3))
            .with_login_url("/login.html");
        let client = ListClient::from_config(config).unwrap();

        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.timeout(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = ListClient::builder()
            .url("http://localhost:5000/api/")
            .build()
            .unwrap();
        assert_eq!(
            client.endpoint(ListKind::Rooms),
            "http://localhost:5000/api/salas"
        );
        assert_eq!(
            client.endpoint(ListKind::Reservations),
            "http://localhost:5000/api/reservas"
        );
    }
}
