//! TileViewer - Configuration-driven map tile viewer core
//!
//! This library turns an `info.json` configuration document into the set of
//! selectable tile layers of a zoomable, pannable viewer, and resolves every
//! visible tile to its relative resource path.
//!
//! # Flow
//!
//! ```text
//! ConfigLoader ──► ViewerConfig ──► LayerRegistry ──► TileViewer (host)
//!  (info.json)     (validated)      (ImageLayer per id)
//! ```
//!
//! Tile paths follow a fixed contract shared with the tile renderer:
//!
//! ```
//! use tileviewer::layer::resolve_tile_url;
//!
//! assert_eq!(resolve_tile_url("sat", 3, 5, 9), "sat/zoom3/5.9.png");
//! ```

pub mod config;
pub mod coord;
pub mod info;
pub mod layer;
pub mod loader;
pub mod logging;
pub mod registry;
pub mod session;
