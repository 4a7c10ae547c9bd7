//! Loader error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the HTTP client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// The client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),

    /// The request could not be sent or timed out.
    #[error("Request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The response body could not be read.
    #[error("Failed to read response: {0}")]
    Body(String),
}

/// Errors that stop the configuration document from loading.
///
/// Fetch and parse failures are treated alike: the viewer is not
/// initialized and nothing is retried.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Fetching the document over HTTP failed.
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: HttpError,
    },

    /// Reading the document from disk failed.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a valid configuration document.
    #[error("Failed to parse configuration document: {0}")]
    Parse(#[from] serde_json::Error),
}
