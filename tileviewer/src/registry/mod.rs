//! Layer registry and host viewer registration.
//!
//! Turns a validated [`ViewerConfig`](crate::layer::ViewerConfig) into one
//! [`ImageLayer`] per layer descriptor and hands them to the host viewer
//! through the [`TileViewer`] trait.
//!
//! # Architecture
//!
//! ```text
//! ViewerConfig ──► LayerRegistry ──register()──► impl TileViewer
//!                   │                              ├── register_layer(id, layer)
//!                   └── ImageLayer (per id)        ├── set_active_layer(first id)
//!                        └── resolve_tile_url      └── set_selectable_layers(ids)
//! ```
//!
//! The host is injected explicitly; nothing here reaches for a global viewer.
//!
//! # Example
//!
//! ```
//! use tileviewer::coord::TileCoord;
//! use tileviewer::layer::{LayerDescriptor, ViewerConfig};
//! use tileviewer::registry::{register_layers, LayerTable};
//!
//! let config = ViewerConfig::new(
//!     256,
//!     "2024-01-01",
//!     vec![LayerDescriptor::new("base", "Base", 0, 5)],
//! );
//!
//! let mut viewer = LayerTable::new();
//! register_layers(&mut viewer, &config).unwrap();
//!
//! assert_eq!(viewer.active_layer(), Some("base"));
//! assert_eq!(
//!     viewer.tile_url(TileCoord::new(1, 1, 2)).as_deref(),
//!     Some("base/zoom2/1.1.png")
//! );
//! ```

mod image_layer;
mod layer_registry;
mod table;
mod viewer;

pub use image_layer::{ImageLayer, TileUrlResolver, FULLY_OPAQUE};
pub use layer_registry::{register_layers, LayerRegistry, RegistryError};
pub use table::LayerTable;
pub use viewer::TileViewer;
