//! Layer objects handed to the host viewer.

use std::fmt;

use crate::coord::TileCoord;
use crate::layer::{resolve_tile_url, LayerDescriptor};

/// Opacity of every registered layer.
pub const FULLY_OPAQUE: f32 = 1.0;

/// Tile path resolver taking the layer id explicitly.
///
/// A plain function pointer: resolvers never capture per-layer state, so
/// the same function serves every layer.
pub type TileUrlResolver = fn(&str, u8, u32, u32) -> String;

/// An image tile layer as registered with the host viewer.
#[derive(Clone)]
pub struct ImageLayer {
    id: String,
    name: String,
    alt: String,
    opacity: f32,
    tile_size: (u32, u32),
    min_zoom: u8,
    max_zoom: u8,
    is_png: bool,
    resolver: TileUrlResolver,
}

impl ImageLayer {
    /// Build the layer object for a descriptor.
    ///
    /// # Arguments
    ///
    /// * `descriptor` - Layer descriptor from the configuration document
    /// * `tile_size` - Global tile edge length in pixels
    pub fn from_descriptor(descriptor: &LayerDescriptor, tile_size: u32) -> Self {
        Self {
            id: descriptor.id.clone(),
            name: descriptor.name.clone(),
            alt: descriptor.name.clone(),
            opacity: FULLY_OPAQUE,
            tile_size: (tile_size, tile_size),
            min_zoom: descriptor.min_zoom,
            max_zoom: descriptor.max_zoom,
            is_png: true,
            resolver: resolve_tile_url,
        }
    }

    /// Resolve the path of one of this layer's tiles.
    #[inline]
    pub fn tile_url(&self, coord: TileCoord) -> String {
        (self.resolver)(&self.id, coord.zoom(), coord.column(), coord.row())
    }

    /// Checks if this layer declares tiles at the given zoom level.
    #[inline]
    pub fn supports_zoom(&self, zoom: u8) -> bool {
        zoom >= self.min_zoom && zoom <= self.max_zoom
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accessible alt text (the display name).
    pub fn alt(&self) -> &str {
        &self.alt
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Tile dimensions in pixels as `(width, height)`.
    pub fn tile_size(&self) -> (u32, u32) {
        self.tile_size
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> u8 {
        self.max_zoom
    }

    pub fn is_png(&self) -> bool {
        self.is_png
    }

    /// The resolver bound to this layer.
    pub fn resolver(&self) -> TileUrlResolver {
        self.resolver
    }
}

impl fmt::Debug for ImageLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageLayer")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("opacity", &self.opacity)
            .field("tile_size", &self.tile_size)
            .field("min_zoom", &self.min_zoom)
            .field("max_zoom", &self.max_zoom)
            .finish_non_exhaustive()
    }
}
