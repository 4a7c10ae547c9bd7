//! Layer configuration document and tile path resolution.
//!
//! The configuration document (`info.json`) enumerates the tile layers a
//! viewer offers. Each layer's tiles live under a directory named after its
//! id, one subdirectory per zoom level:
//!
//! ```text
//! <id>/zoom<zoom>/<column>.<row>.png
//! ```
//!
//! # Example
//!
//! ```
//! use tileviewer::layer::{build_layer_ids, resolve_tile_url, ViewerConfig};
//!
//! let json = r#"{
//!     "tileSize": 256,
//!     "time": "March 5, 2024",
//!     "types": [
//!         { "id": "day", "name": "Day", "minZoom": 0, "maxZoom": 4 },
//!         { "id": "night", "name": "Night", "minZoom": 0, "maxZoom": 4 }
//!     ]
//! }"#;
//!
//! let config: ViewerConfig = serde_json::from_str(json).unwrap();
//! assert_eq!(build_layer_ids(&config).unwrap(), vec!["day", "night"]);
//! assert_eq!(resolve_tile_url("night", 2, 1, 3), "night/zoom2/1.3.png");
//! ```

mod document;
mod error;
mod url;

pub use document::{build_layer_ids, LayerDescriptor, ViewerConfig};
pub use error::ConfigError;
pub use url::{resolve_tile_url, TILE_EXTENSION, ZOOM_DIR_PREFIX};
