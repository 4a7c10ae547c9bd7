//! Coordinate type definitions

use std::fmt;

/// Tile coordinates within a single layer.
///
/// Produced by the host viewer for each tile-rendering request and
/// discarded once the tile path has been resolved. Each layer is
/// addressed independently, so the same coordinate may name a tile in
/// every registered layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// X coordinate (west-east), 0 at west
    column: u32,
    /// Y coordinate (north-south), 0 at north
    row: u32,
    /// Zoom level
    zoom: u8,
}

impl TileCoord {
    /// Create a new tile coordinate.
    ///
    /// # Arguments
    ///
    /// * `column` - Tile column (X)
    /// * `row` - Tile row (Y)
    /// * `zoom` - Zoom level
    #[inline]
    pub fn new(column: u32, row: u32, zoom: u8) -> Self {
        Self { column, row, zoom }
    }

    /// Get the tile column.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Get the tile row.
    #[inline]
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Get the zoom level.
    #[inline]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}@z{}", self.column, self.row, self.zoom)
    }
}
