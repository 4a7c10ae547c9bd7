//! Configuration loader implementations.

use std::future::Future;
use std::path::PathBuf;

use tracing::{debug, info};

use super::{AsyncHttpClient, AsyncReqwestClient, ConfigSource, LoadError, INFO_FILENAME};
use crate::layer::ViewerConfig;

/// Loads the configuration document.
///
/// Each call performs exactly one fetch and yields the parsed document or
/// the failure. Implementations never synthesize a default document.
pub trait ConfigLoader: Send + Sync {
    /// Fetch and parse the configuration document.
    fn load(&self) -> impl Future<Output = Result<ViewerConfig, LoadError>> + Send;

    /// Human-readable location of the document, for logs and messages.
    fn location(&self) -> String;
}

/// Parse a configuration document from raw bytes.
///
/// Only the structure is checked here; invariants are enforced when the
/// layers are registered.
pub fn parse_document(bytes: &[u8]) -> Result<ViewerConfig, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Loads `info.json` from a base URL.
pub struct HttpConfigLoader<C: AsyncHttpClient> {
    http_client: C,
    url: String,
}

impl<C: AsyncHttpClient> HttpConfigLoader<C> {
    /// Create a loader for the document under `base_url`.
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for the single GET request
    /// * `base_url` - Viewer base URL (without the document name)
    pub fn new(http_client: C, base_url: &str) -> Self {
        Self {
            http_client,
            url: format!("{}/{}", base_url.trim_end_matches('/'), INFO_FILENAME),
        }
    }

    /// Full URL of the document.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl<C: AsyncHttpClient> ConfigLoader for HttpConfigLoader<C> {
    async fn load(&self) -> Result<ViewerConfig, LoadError> {
        debug!(url = %self.url, "Fetching configuration document");

        let body = self
            .http_client
            .get(&self.url)
            .await
            .map_err(|source| LoadError::Fetch {
                url: self.url.clone(),
                source,
            })?;

        let config = parse_document(&body)?;
        info!(url = %self.url, layers = config.types.len(), "Configuration loaded");
        Ok(config)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Loads `info.json` from a local directory.
#[derive(Debug, Clone)]
pub struct FileConfigLoader {
    path: PathBuf,
}

impl FileConfigLoader {
    /// Create a loader for the document inside `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(INFO_FILENAME),
        }
    }

    /// Full path of the document.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl ConfigLoader for FileConfigLoader {
    async fn load(&self) -> Result<ViewerConfig, LoadError> {
        debug!(path = %self.path.display(), "Reading configuration document");

        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|source| LoadError::Read {
                path: self.path.clone(),
                source,
            })?;

        let config = parse_document(&body)?;
        info!(path = %self.path.display(), layers = config.types.len(), "Configuration loaded");
        Ok(config)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Loader chosen from a [`ConfigSource`].
pub enum SourceLoader {
    Http(HttpConfigLoader<AsyncReqwestClient>),
    File(FileConfigLoader),
}

impl SourceLoader {
    /// Build the loader matching a source.
    ///
    /// # Arguments
    ///
    /// * `source` - Remote or local viewer location
    /// * `timeout_secs` - HTTP timeout, ignored for local sources
    pub fn from_source(source: ConfigSource, timeout_secs: u64) -> Result<Self, LoadError> {
        match source {
            ConfigSource::Url(base) => {
                let client = AsyncReqwestClient::with_timeout(timeout_secs).map_err(|source| {
                    LoadError::Fetch {
                        url: base.clone(),
                        source,
                    }
                })?;
                Ok(SourceLoader::Http(HttpConfigLoader::new(client, &base)))
            }
            ConfigSource::Directory(dir) => Ok(SourceLoader::File(FileConfigLoader::new(dir))),
        }
    }
}

impl ConfigLoader for SourceLoader {
    async fn load(&self) -> Result<ViewerConfig, LoadError> {
        match self {
            SourceLoader::Http(loader) => loader.load().await,
            SourceLoader::File(loader) => loader.load().await,
        }
    }

    fn location(&self) -> String {
        match self {
            SourceLoader::Http(loader) => loader.location(),
            SourceLoader::File(loader) => loader.location(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerDescriptor;
    use crate::loader::{serve_once, HttpError, MockAsyncHttpClient};

    const DOCUMENT: &str = r#"{
        "tileSize": 256,
        "time": "2024-01-01",
        "types": [{ "id": "base", "name": "Base", "minZoom": 0, "maxZoom": 5 }]
    }"#;

    #[test]
    fn test_parse_document() {
        let config = parse_document(DOCUMENT.as_bytes()).unwrap();
        assert_eq!(config.types, vec![LayerDescriptor::new("base", "Base", 0, 5)]);
    }

    #[test]
    fn test_parse_document_malformed() {
        let err = parse_document(b"{ not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_parse_document_missing_field() {
        let err = parse_document(br#"{ "tileSize": 256, "types": [] }"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn test_parse_document_does_not_validate() {
        let config = parse_document(br#"{ "tileSize": 256, "time": "", "types": [] }"#).unwrap();
        assert!(config.types.is_empty());
    }

    #[tokio::test]
    async fn test_http_loader_requests_info_json() {
        let client = MockAsyncHttpClient::new(Ok(DOCUMENT.as_bytes().to_vec()));
        let loader = HttpConfigLoader::new(client, "http://localhost:8000/world/");

        let config = loader.load().await.unwrap();
        assert_eq!(config.tile_size, 256);
        assert_eq!(
            loader.http_client.requested_urls(),
            vec!["http://localhost:8000/world/info.json"]
        );
    }

    #[tokio::test]
    async fn test_http_loader_fetch_failure_propagates() {
        let client = MockAsyncHttpClient::new(Err(HttpError::Status {
            url: "http://localhost/info.json".to_string(),
            status: 500,
        }));
        let loader = HttpConfigLoader::new(client, "http://localhost");

        let err = loader.load().await.unwrap_err();
        assert!(matches!(
            err,
            LoadError::Fetch {
                source: HttpError::Status { status: 500, .. },
                ..
            }
        ));
        // One fetch, no retry
        assert_eq!(loader.http_client.requested_urls().len(), 1);
    }

    #[tokio::test]
    async fn test_http_loader_parse_failure() {
        let client = MockAsyncHttpClient::new(Ok(b"<html>".to_vec()));
        let loader = HttpConfigLoader::new(client, "http://localhost");

        assert!(matches!(loader.load().await, Err(LoadError::Parse(_))));
    }

    #[tokio::test]
    async fn test_http_loader_over_network() {
        let base = serve_once("200 OK", DOCUMENT).await;
        let loader = HttpConfigLoader::new(AsyncReqwestClient::with_timeout(5).unwrap(), &base);

        let config = loader.load().await.unwrap();
        assert_eq!(config.types[0].id, "base");
    }

    #[tokio::test]
    async fn test_http_loader_not_found_is_fetch_error() {
        let base = serve_once("404 Not Found", "").await;
        let loader = HttpConfigLoader::new(AsyncReqwestClient::with_timeout(5).unwrap(), &base);

        let err = loader.load().await.unwrap_err();
        match err {
            LoadError::Fetch { url, source } => {
                assert_eq!(url, format!("{}/info.json", base));
                assert!(matches!(source, HttpError::Status { status: 404, .. }));
            }
            other => panic!("expected fetch error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_file_loader_reads_document() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join(INFO_FILENAME), DOCUMENT).unwrap();

        let loader = FileConfigLoader::new(dir.path());
        let config = loader.load().await.unwrap();
        assert_eq!(config.time, "2024-01-01");
    }

    #[tokio::test]
    async fn test_file_loader_missing_document() {
        let dir = tempfile::TempDir::new().unwrap();
        let loader = FileConfigLoader::new(dir.path());

        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_source_loader_for_directory() {
        let loader =
            SourceLoader::from_source(ConfigSource::Directory(PathBuf::from("/srv/www")), 30)
                .unwrap();
        assert!(matches!(loader, SourceLoader::File(_)));
        assert_eq!(loader.location(), "/srv/www/info.json");
    }

    #[test]
    fn test_source_loader_for_url() {
        let loader =
            SourceLoader::from_source(ConfigSource::Url("http://localhost".to_string()), 5)
                .unwrap();
        assert!(matches!(loader, SourceLoader::Http(_)));
        assert_eq!(loader.location(), "http://localhost/info.json");
    }
}
