//! Tile coordinate module
//!
//! Provides the transient `(column, row, zoom)` address the host viewer
//! produces for every tile it wants to render.

mod types;

pub use types::TileCoord;
