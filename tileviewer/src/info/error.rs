//! Info builder errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::layer::ConfigError;

/// Errors that can occur while building `info.json`.
#[derive(Debug, Error)]
pub enum InfoError {
    /// Filesystem access failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A layer directory contains no `zoom<N>` subdirectories.
    #[error("Layer '{id}' has no zoom level directories in {}", .path.display())]
    NoZoomLevels { id: String, path: PathBuf },

    /// A layer argument is not of the form `id=Name`.
    #[error("Invalid layer '{0}': expected id=Name")]
    InvalidLayerSpec(String),

    /// The resulting document violates an invariant.
    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigError),

    /// The document could not be serialized.
    #[error("Failed to serialize configuration document: {0}")]
    Serialize(#[from] serde_json::Error),
}
