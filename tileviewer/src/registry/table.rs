//! In-memory host viewer.

use crate::coord::TileCoord;

use super::{ImageLayer, TileViewer};

/// A headless [`TileViewer`] that records what was registered.
///
/// Layers keep their registration order; registering an id a second time
/// replaces the stored layer in place.
#[derive(Debug, Default)]
pub struct LayerTable {
    layers: Vec<(String, ImageLayer)>,
    active: Option<String>,
    selectable: Vec<String>,
}

impl LayerTable {
    /// Create an empty layer table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the layer registered under `id`.
    pub fn layer(&self, id: &str) -> Option<&ImageLayer> {
        self.layers
            .iter()
            .find(|(layer_id, _)| layer_id == id)
            .map(|(_, layer)| layer)
    }

    /// Iterate over registered layers in registration order.
    pub fn layers(&self) -> impl Iterator<Item = &ImageLayer> {
        self.layers.iter().map(|(_, layer)| layer)
    }

    /// Number of registered layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if no layer has been registered.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Id of the active layer, if one has been set.
    pub fn active_layer(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The active layer object, if it is registered.
    pub fn active(&self) -> Option<&ImageLayer> {
        self.active.as_deref().and_then(|id| self.layer(id))
    }

    /// Ids shown in the layer-selection control.
    pub fn selectable_layers(&self) -> &[String] {
        &self.selectable
    }

    /// Switch the active layer, as a user would through the layer control.
    ///
    /// Only selectable, registered ids are accepted. Returns whether the
    /// active layer changed.
    pub fn select(&mut self, id: &str) -> bool {
        let selectable = self.selectable.iter().any(|s| s == id);
        if !selectable || self.layer(id).is_none() {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }

    /// Resolve a tile of the active layer.
    pub fn tile_url(&self, coord: TileCoord) -> Option<String> {
        self.active().map(|layer| layer.tile_url(coord))
    }
}

impl TileViewer for LayerTable {
    fn register_layer(&mut self, id: &str, layer: ImageLayer) {
        match self.layers.iter_mut().find(|(layer_id, _)| layer_id == id) {
            Some((_, existing)) => *existing = layer,
            None => self.layers.push((id.to_string(), layer)),
        }
    }

    fn set_active_layer(&mut self, id: &str) {
        self.active = Some(id.to_string());
    }

    fn set_selectable_layers(&mut self, ids: &[String]) {
        self.selectable = ids.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerDescriptor;

    fn image_layer(id: &str, name: &str) -> ImageLayer {
        ImageLayer::from_descriptor(&LayerDescriptor::new(id, name, 0, 3), 256)
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = LayerTable::new();
        assert!(table.is_empty());
        assert!(table.active_layer().is_none());
        assert!(table.selectable_layers().is_empty());
        assert!(table.tile_url(TileCoord::new(0, 0, 0)).is_none());
    }

    #[test]
    fn test_register_keeps_order() {
        let mut table = LayerTable::new();
        table.register_layer("b", image_layer("b", "B"));
        table.register_layer("a", image_layer("a", "A"));

        let ids: Vec<&str> = table.layers().map(|l| l.id()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_register_same_id_replaces() {
        let mut table = LayerTable::new();
        table.register_layer("a", image_layer("a", "Old"));
        table.register_layer("a", image_layer("a", "New"));

        assert_eq!(table.len(), 1);
        assert_eq!(table.layer("a").map(|l| l.name()), Some("New"));
    }

    #[test]
    fn test_select_requires_selectable_id() {
        let mut table = LayerTable::new();
        table.register_layer("a", image_layer("a", "A"));
        table.register_layer("b", image_layer("b", "B"));
        table.set_selectable_layers(&["a".to_string()]);
        table.set_active_layer("a");

        assert!(!table.select("b"));
        assert!(!table.select("missing"));
        assert_eq!(table.active_layer(), Some("a"));
    }

    #[test]
    fn test_select_switches_tile_urls() {
        let mut table = LayerTable::new();
        table.register_layer("a", image_layer("a", "A"));
        table.register_layer("b", image_layer("b", "B"));
        table.set_selectable_layers(&["a".to_string(), "b".to_string()]);
        table.set_active_layer("a");

        let coord = TileCoord::new(2, 3, 1);
        assert_eq!(table.tile_url(coord).as_deref(), Some("a/zoom1/2.3.png"));

        assert!(table.select("b"));
        assert_eq!(table.tile_url(coord).as_deref(), Some("b/zoom1/2.3.png"));
    }
}
