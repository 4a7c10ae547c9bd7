//! Configuration document builder.
//!
//! Writes `info.json` for a tile tree that has already been rendered. Each
//! layer directory under the www root holds one `zoom<N>` subdirectory per
//! rendered zoom level; the lowest and highest become the layer's zoom
//! bounds.
//!
//! ```text
//! www/
//! ├── info.json          ◄── written here
//! ├── day/
//! │   ├── zoom0/0.0.png
//! │   └── zoom1/...
//! └── night/
//!     └── ...
//! ```

mod builder;
mod error;
mod scan;

pub use builder::{format_time_label, InfoBuilder, LayerSource};
pub use error::InfoError;
pub use scan::scan_zoom_levels;
