//! Configuration document loading.
//!
//! The document is always named [`INFO_FILENAME`] and lives next to the
//! tile tree, either behind a web server or in a local directory. Loading is
//! a single asynchronous fetch followed by a JSON parse; there are no
//! retries and no fallback document.
//!
//! # Example
//!
//! ```ignore
//! use tileviewer::loader::{ConfigLoader, ConfigSource, SourceLoader};
//!
//! let source: ConfigSource = "https://maps.example.com/world".parse()?;
//! let loader = SourceLoader::from_source(source, 30)?;
//! let config = loader.load().await?;
//! ```

mod error;
mod http;
mod loaders;
mod source;

pub use error::{HttpError, LoadError};
pub use http::{AsyncHttpClient, AsyncReqwestClient, DEFAULT_TIMEOUT_SECS};
pub use loaders::{parse_document, ConfigLoader, FileConfigLoader, HttpConfigLoader, SourceLoader};
pub use source::{ConfigSource, INFO_FILENAME};

#[cfg(test)]
pub use http::tests::{serve_once, MockAsyncHttpClient};
