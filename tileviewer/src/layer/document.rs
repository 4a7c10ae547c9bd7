//! Configuration document types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// The viewer configuration document, loaded once per session.
///
/// Serialized as camelCase JSON (`tileSize`, `minZoom`, ...). Layer order is
/// significant: the first layer is the initial active layer and controls
/// are laid out in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig {
    /// Optional map API key written by the tile generator; unused here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Edge length in pixels of every (square) tile, for all layers.
    pub tile_size: u32,

    /// Display label, typically the render date. Never parsed.
    pub time: String,

    /// Layer descriptors in display order.
    pub types: Vec<LayerDescriptor>,
}

/// One selectable tile layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDescriptor {
    /// Unique id; selector key and first tile path segment.
    pub id: String,

    /// Display name, also used as accessible alt text.
    pub name: String,

    /// Lowest zoom level with tiles (inclusive).
    pub min_zoom: u8,

    /// Highest zoom level with tiles (inclusive).
    pub max_zoom: u8,
}

impl LayerDescriptor {
    /// Create a new layer descriptor.
    pub fn new(id: impl Into<String>, name: impl Into<String>, min_zoom: u8, max_zoom: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            min_zoom,
            max_zoom,
        }
    }

    /// Checks if this layer declares tiles at the given zoom level.
    #[inline]
    pub fn supports_zoom(&self, zoom: u8) -> bool {
        zoom >= self.min_zoom && zoom <= self.max_zoom
    }
}

impl ViewerConfig {
    /// Create a configuration document with no API key.
    pub fn new(tile_size: u32, time: impl Into<String>, types: Vec<LayerDescriptor>) -> Self {
        Self {
            api_key: None,
            tile_size,
            time: time.into(),
            types,
        }
    }

    /// Check every document invariant, failing on the first violation.
    ///
    /// Rejects an empty layer list, a zero tile size, empty or duplicate
    /// layer ids, and layers whose `minZoom` exceeds `maxZoom`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.types.is_empty() {
            return Err(ConfigError::NoLayers);
        }
        if self.tile_size == 0 {
            return Err(ConfigError::ZeroTileSize);
        }

        let mut seen = HashSet::with_capacity(self.types.len());
        for (index, layer) in self.types.iter().enumerate() {
            if layer.id.is_empty() {
                return Err(ConfigError::EmptyLayerId { index });
            }
            if !seen.insert(layer.id.as_str()) {
                return Err(ConfigError::DuplicateLayerId(layer.id.clone()));
            }
            if layer.min_zoom > layer.max_zoom {
                return Err(ConfigError::InvalidZoomRange {
                    id: layer.id.clone(),
                    min_zoom: layer.min_zoom,
                    max_zoom: layer.max_zoom,
                });
            }
        }

        Ok(())
    }

    /// Find a layer by id.
    pub fn layer(&self, id: &str) -> Option<&LayerDescriptor> {
        self.types.iter().find(|layer| layer.id == id)
    }
}

/// Collect the layer ids in document order.
///
/// The first id is the initial active layer. An empty layer list is a
/// configuration error rather than an empty result.
pub fn build_layer_ids(config: &ViewerConfig) -> Result<Vec<String>, ConfigError> {
    if config.types.is_empty() {
        return Err(ConfigError::NoLayers);
    }

    Ok(config.types.iter().map(|layer| layer.id.clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(id: &str) -> LayerDescriptor {
        LayerDescriptor::new(id, id.to_uppercase(), 0, 5)
    }

    #[test]
    fn test_parse_document() {
        let json = r#"{
            "tileSize": 256,
            "time": "2024-01-01",
            "types": [{ "id": "base", "name": "Base", "minZoom": 0, "maxZoom": 5 }]
        }"#;

        let config: ViewerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tile_size, 256);
        assert_eq!(config.time, "2024-01-01");
        assert!(config.api_key.is_none());
        assert_eq!(config.types, vec![LayerDescriptor::new("base", "Base", 0, 5)]);
    }

    #[test]
    fn test_parse_document_with_api_key() {
        let json = r#"{
            "apiKey": "abc123",
            "tileSize": 512,
            "time": "May 1, 2024",
            "types": [{ "id": "day", "name": "Day", "minZoom": 1, "maxZoom": 3 }]
        }"#;

        let config: ViewerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.tile_size, 512);
    }

    #[test]
    fn test_serialize_uses_camel_case_and_omits_missing_key() {
        let config = ViewerConfig::new(256, "t", vec![LayerDescriptor::new("a", "A", 0, 2)]);
        let json = serde_json::to_string(&config).unwrap();

        assert!(json.contains("\"tileSize\":256"));
        assert!(json.contains("\"minZoom\":0"));
        assert!(json.contains("\"maxZoom\":2"));
        assert!(!json.contains("apiKey"));
    }

    #[test]
    fn test_parse_rejects_negative_zoom() {
        let json = r#"{
            "tileSize": 256,
            "time": "",
            "types": [{ "id": "a", "name": "A", "minZoom": -1, "maxZoom": 3 }]
        }"#;

        assert!(serde_json::from_str::<ViewerConfig>(json).is_err());
    }

    #[test]
    fn test_build_layer_ids_preserves_order() {
        let config = ViewerConfig::new(256, "", vec![layer("a"), layer("b"), layer("c")]);
        let ids = build_layer_ids(&config).unwrap();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(ids[0], "a");
    }

    #[test]
    fn test_build_layer_ids_empty_is_error() {
        let config = ViewerConfig::new(256, "", vec![]);
        assert_eq!(build_layer_ids(&config), Err(ConfigError::NoLayers));
    }

    #[test]
    fn test_validate_accepts_valid_document() {
        let config = ViewerConfig::new(256, "", vec![layer("a"), layer("b")]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_accepts_single_zoom_level() {
        let config = ViewerConfig::new(256, "", vec![LayerDescriptor::new("a", "A", 4, 4)]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_types() {
        let config = ViewerConfig::new(256, "", vec![]);
        assert_eq!(config.validate(), Err(ConfigError::NoLayers));
    }

    #[test]
    fn test_validate_rejects_zero_tile_size() {
        let config = ViewerConfig::new(0, "", vec![layer("a")]);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTileSize));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let config = ViewerConfig::new(256, "", vec![layer("a"), layer("b"), layer("a")]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateLayerId("a".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let config = ViewerConfig::new(256, "", vec![layer("a"), layer("")]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyLayerId { index: 1 })
        );
    }

    #[test]
    fn test_validate_rejects_inverted_zoom_range() {
        let config = ViewerConfig::new(256, "", vec![LayerDescriptor::new("a", "A", 5, 2)]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidZoomRange {
                min_zoom: 5,
                max_zoom: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_supports_zoom_is_inclusive() {
        let layer = LayerDescriptor::new("a", "A", 2, 4);
        assert!(!layer.supports_zoom(1));
        assert!(layer.supports_zoom(2));
        assert!(layer.supports_zoom(4));
        assert!(!layer.supports_zoom(5));
    }

    #[test]
    fn test_layer_lookup() {
        let config = ViewerConfig::new(256, "", vec![layer("a"), layer("b")]);
        assert_eq!(config.layer("b").map(|l| l.name.as_str()), Some("B"));
        assert!(config.layer("z").is_none());
    }
}
