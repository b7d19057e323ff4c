//! Data sources for the initial record sequence
//!
//! A data source is fetched exactly once, at startup. Supported locations:
//! 1. HTTP(S) URLs (non-success status is a failure)
//! 2. Local JSON files (plain paths or `file://` URLs)
//! 3. In-memory records
//!
//! No retries are attempted; a failed fetch resolves straight to a `LoadError`.

use async_trait::async_trait;
use extdeck_core::{LoadError, RawExtension};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Provider of the initial record sequence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Retrieve and parse the record sequence
    async fn fetch(&self) -> Result<Vec<RawExtension>, LoadError>;

    /// Human-readable location for logs
    fn describe(&self) -> String;
}

/// Parse a payload as a JSON array of records
pub fn parse_payload(location: &str, body: &str) -> Result<Vec<RawExtension>, LoadError> {
    serde_json::from_str(body).map_err(|e| LoadError::parse(location, e))
}

/// Records fetched over HTTP(S)
pub struct HttpDataSource {
    url: String,
    client: reqwest::Client,
}

impl HttpDataSource {
    /// Create an HTTP source with a request timeout
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        let url = url.into();
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LoadError::unreachable(&url, e.to_string()))?;

        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    async fn fetch(&self) -> Result<Vec<RawExtension>, LoadError> {
        debug!("Fetching extensions from: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::unreachable(&self.url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::status(&self.url, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::unreachable(&self.url, e.to_string()))?;

        parse_payload(&self.url, &body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Records read from a local JSON file
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn fetch(&self) -> Result<Vec<RawExtension>, LoadError> {
        let location = self.describe();
        debug!("Reading extensions from: {}", location);

        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::unreachable(&location, e.to_string()))?;

        parse_payload(&location, &body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Records already held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource {
    records: Vec<RawExtension>,
}

impl StaticDataSource {
    pub fn new(records: Vec<RawExtension>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch(&self) -> Result<Vec<RawExtension>, LoadError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("<{} in-memory records>", self.records.len())
    }
}

/// Where the data source lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSourceLocation {
    Http(String),
    File(PathBuf),
}

impl DataSourceLocation {
    /// Classify a configured location
    ///
    /// `http://` and `https://` URLs are fetched over the network, `file://`
    /// URLs and everything else are treated as filesystem paths.
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                DataSourceLocation::Http(location.to_string())
            }
            Ok(url) if url.scheme() == "file" => match url.to_file_path() {
                Ok(path) => DataSourceLocation::File(path),
                Err(()) => DataSourceLocation::File(PathBuf::from(location)),
            },
            _ => DataSourceLocation::File(PathBuf::from(location)),
        }
    }

    /// Build the matching data source
    pub fn into_source(self, http_timeout: Duration) -> Result<Box<dyn DataSource>, LoadError> {
        match self {
            DataSourceLocation::Http(url) => Ok(Box::new(HttpDataSource::new(url, http_timeout)?)),
            DataSourceLocation::File(path) => Ok(Box::new(FileDataSource::new(path))),
        }
    }
}
