//! Layer registry construction and registration.

use thiserror::Error;
use tracing::{debug, info};

use crate::coord::TileCoord;
use crate::layer::{build_layer_ids, ConfigError, ViewerConfig};

use super::{ImageLayer, TileViewer};

/// Errors from registry lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No layer is registered under the id.
    #[error("Unknown layer '{0}'")]
    UnknownLayer(String),
}

/// The selectable layer set built from a configuration document.
///
/// Construction validates the document, so every registry holds at least
/// one layer with unique ids and well-ordered zoom bounds.
#[derive(Debug, Clone)]
pub struct LayerRegistry {
    ids: Vec<String>,
    layers: Vec<ImageLayer>,
    tile_size: u32,
}

impl LayerRegistry {
    /// Build the registry from a configuration document.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found in the document.
    pub fn from_config(config: &ViewerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let ids = build_layer_ids(config)?;

        let layers = config
            .types
            .iter()
            .map(|descriptor| ImageLayer::from_descriptor(descriptor, config.tile_size))
            .collect();

        Ok(Self {
            ids,
            layers,
            tile_size: config.tile_size,
        })
    }

    /// Layer ids in document order.
    pub fn layer_ids(&self) -> &[String] {
        &self.ids
    }

    /// The initial active layer (the first in the document).
    pub fn initial_layer(&self) -> &str {
        // from_config guarantees at least one id
        &self.ids[0]
    }

    /// Layers in document order.
    pub fn layers(&self) -> &[ImageLayer] {
        &self.layers
    }

    /// Get a layer by id.
    pub fn layer(&self, id: &str) -> Option<&ImageLayer> {
        self.layers.iter().find(|layer| layer.id() == id)
    }

    /// Global tile edge length in pixels.
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Resolve a tile path for a registered layer.
    ///
    /// The zoom is not checked against the layer's bounds.
    pub fn tile_url(&self, id: &str, coord: TileCoord) -> Result<String, RegistryError> {
        self.layer(id)
            .map(|layer| layer.tile_url(coord))
            .ok_or_else(|| RegistryError::UnknownLayer(id.to_string()))
    }

    /// Register every layer with the host viewer.
    ///
    /// Registers layers under their ids in document order, activates the
    /// first one and exposes all ids in the layer control. Running it again
    /// against the same viewer overwrites the same entries.
    pub fn register<V: TileViewer + ?Sized>(&self, viewer: &mut V) {
        for layer in &self.layers {
            debug!(
                id = layer.id(),
                name = layer.name(),
                min_zoom = layer.min_zoom(),
                max_zoom = layer.max_zoom(),
                "Registering tile layer"
            );
            viewer.register_layer(layer.id(), layer.clone());
        }

        viewer.set_active_layer(self.initial_layer());
        viewer.set_selectable_layers(&self.ids);

        info!(
            layers = self.ids.len(),
            active = self.initial_layer(),
            tile_size = self.tile_size,
            "Tile layers registered"
        );
    }
}

/// Validate a configuration document and register its layers.
///
/// # Errors
///
/// Fails before touching the viewer if the document violates any
/// invariant, so an invalid document never yields a partial layer set.
pub fn register_layers<V: TileViewer + ?Sized>(
    viewer: &mut V,
    config: &ViewerConfig,
) -> Result<LayerRegistry, ConfigError> {
    let registry = LayerRegistry::from_config(config)?;
    registry.register(viewer);
    Ok(registry)
}
