//! Tile path resolution.

/// Prefix of every zoom-level directory (`zoom0`, `zoom1`, ...).
pub const ZOOM_DIR_PREFIX: &str = "zoom";

/// File extension of every tile image.
pub const TILE_EXTENSION: &str = "png";

/// Resolves a tile to its path relative to the viewer's base location.
///
/// The result is always `<layer_id>/zoom<zoom>/<column>.<row>.png`. This
/// format is shared with whatever serves the tile tree and must not change.
///
/// The function is pure: it does not look up the layer and does not check
/// the zoom against the layer's declared range. A zoom outside that range
/// still yields a well-formed path; whether a file exists there is the
/// host's concern.
///
/// # Example
///
/// ```
/// use tileviewer::layer::resolve_tile_url;
///
/// assert_eq!(resolve_tile_url("sat", 3, 5, 9), "sat/zoom3/5.9.png");
/// ```
#[inline]
pub fn resolve_tile_url(layer_id: &str, zoom: u8, column: u32, row: u32) -> String {
    format!(
        "{}/{}{}/{}.{}.{}",
        layer_id, ZOOM_DIR_PREFIX, zoom, column, row, TILE_EXTENSION
    )
}
