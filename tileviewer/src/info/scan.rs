//! Zoom level discovery.

use std::path::Path;

use super::InfoError;
use crate::layer::ZOOM_DIR_PREFIX;

/// List the zoom levels rendered under a layer directory.
///
/// Returns the numbers of all subdirectories named `zoom<N>`, sorted
/// ascending. Files and other directories are ignored, as are names whose
/// suffix is not a zoom number exactly as tile paths print it (`zoom03` and
/// `zoom+3` are skipped).
pub fn scan_zoom_levels(dir: &Path) -> Result<Vec<u8>, InfoError> {
    let io_err = |source| InfoError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut levels = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        if !entry.file_type().map_err(io_err)?.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let zoom = name
            .to_str()
            .and_then(|n| n.strip_prefix(ZOOM_DIR_PREFIX))
            .and_then(parse_zoom_suffix);

        if let Some(zoom) = zoom {
            levels.push(zoom);
        }
    }

    levels.sort_unstable();
    Ok(levels)
}

/// Parse a zoom suffix only if it prints back unchanged.
fn parse_zoom_suffix(suffix: &str) -> Option<u8> {
    suffix
        .parse::<u8>()
        .ok()
        .filter(|zoom| zoom.to_string() == suffix)
}
