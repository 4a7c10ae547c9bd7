//! Host viewer interface.

use super::ImageLayer;

/// The host map widget's layer table.
///
/// The host owns panning, zooming, projection, tile caching and control
/// rendering. The core only registers layers with it, once per session.
pub trait TileViewer {
    /// Register (or replace) the layer stored under `id`.
    fn register_layer(&mut self, id: &str, layer: ImageLayer);

    /// Make `id` the active layer.
    fn set_active_layer(&mut self, id: &str);

    /// Expose `ids`, in order, in the layer-selection control.
    fn set_selectable_layers(&mut self, ids: &[String]);
}
