//! Configuration document errors.

use thiserror::Error;

/// Invariant violations in a configuration document.
///
/// A document that fails any of these checks is rejected as a whole; no
/// partially-functional layer set is ever registered.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The document declares no layers.
    #[error("Configuration declares no tile layers")]
    NoLayers,

    /// The global tile size is zero.
    #[error("Tile size must be a positive number of pixels")]
    ZeroTileSize,

    /// A layer has an empty id.
    #[error("Layer at position {index} has an empty id")]
    EmptyLayerId { index: usize },

    /// Two layers share the same id.
    #[error("Duplicate layer id '{0}'")]
    DuplicateLayerId(String),

    /// A layer's minimum zoom exceeds its maximum zoom.
    #[error("Layer '{id}' has minZoom {min_zoom} greater than maxZoom {max_zoom}")]
    InvalidZoomRange {
        id: String,
        min_zoom: u8,
        max_zoom: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_no_layers() {
        assert_eq!(
            ConfigError::NoLayers.to_string(),
            "Configuration declares no tile layers"
        );
    }

    #[test]
    fn test_display_duplicate_id() {
        let err = ConfigError::DuplicateLayerId("sat".to_string());
        assert_eq!(err.to_string(), "Duplicate layer id 'sat'");
    }

    #[test]
    fn test_display_invalid_zoom_range() {
        let err = ConfigError::InvalidZoomRange {
            id: "iso".to_string(),
            min_zoom: 6,
            max_zoom: 2,
        };
        assert_eq!(
            err.to_string(),
            "Layer 'iso' has minZoom 6 greater than maxZoom 2"
        );
    }
}
