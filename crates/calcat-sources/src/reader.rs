//! Reading raw calendar text from files and URLs.
//!
//! [`SourceReader`] is the seam between the pipeline and the outside world.
//! [`DefaultReader`] reads local files with `tokio::fs` and network
//! locations with `reqwest`.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::time::Duration;

use reqwest::Client;
use tracing::{debug, trace};
use url::Url;

use crate::error::{SourceError, SourceResult};
use crate::location::{Location, LocationKind};

/// A boxed future for async trait methods.
///
/// Boxed futures keep the trait object-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Reads the raw text behind a location.
pub trait SourceReader: Send + Sync {
    /// Returns the document text.
    ///
    /// # Errors
    ///
    /// Returns a `SourceUnavailable` error if the location cannot be reached
    /// or opened.
    fn read<'a>(&'a self, location: &'a Location) -> BoxFuture<'a, SourceResult<String>>;
}

/// Settings for network reads.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            user_agent: format!("calcat/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ReaderConfig {
    /// Default timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Reads local files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileReader;

impl FileReader {
    /// Reads a file as UTF-8 text.
    pub async fn read_path(&self, path: &Path) -> SourceResult<String> {
        trace!(path = %path.display(), "Reading file");
        tokio::fs::read_to_string(path).await.map_err(|e| {
            SourceError::unavailable(format!("failed to read {}: {}", path.display(), e))
                .with_source(e)
        })
    }
}

/// Reads `http`/`https` URLs.
#[derive(Debug, Clone)]
pub struct HttpReader {
    client: Client,
}

impl HttpReader {
    /// Creates a new HTTP reader.
    pub fn new(config: &ReaderConfig) -> SourceResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                SourceError::unavailable(format!("failed to create HTTP client: {}", e))
                    .with_source(e)
            })?;
        Ok(Self { client })
    }

    /// Performs a GET request and returns the body.
    pub async fn get(&self, url: &Url) -> SourceResult<String> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(SourceError::unavailable(format!(
                "unsupported URL scheme: {}",
                url.scheme()
            )));
        }

        trace!(url = %url, "Sending request");
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            SourceError::unavailable(format!("request failed: {}", e)).with_source(e)
        })?;

        let status = response.status();
        trace!(status = %status, "Received response");
        if !status.is_success() {
            return Err(SourceError::unavailable(format!(
                "unexpected status {}",
                status
            )));
        }

        response.text().await.map_err(|e| {
            SourceError::unavailable(format!("failed to read response: {}", e)).with_source(e)
        })
    }
}

/// Dispatches files to [`FileReader`] and URLs to [`HttpReader`].
#[derive(Debug, Clone)]
pub struct DefaultReader {
    files: FileReader,
    http: HttpReader,
}

impl DefaultReader {
    /// Creates a reader with the given network settings.
    pub fn new(config: &ReaderConfig) -> SourceResult<Self> {
        Ok(Self {
            files: FileReader,
            http: HttpReader::new(config)?,
        })
    }
}

impl SourceReader for DefaultReader {
    fn read<'a>(&'a self, location: &'a Location) -> BoxFuture<'a, SourceResult<String>> {
        Box::pin(async move {
            let text = match location.kind() {
                LocationKind::Path(path) => self.files.read_path(path).await,
                LocationKind::Url(url) => self.http.get(url).await,
            }
            .map_err(|e| e.with_location(location.input()))?;

            debug!(location = %location, bytes = text.len(), "Read source");
            Ok(text)
        })
    }
}
