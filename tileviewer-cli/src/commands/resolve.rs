//! Resolve command - print the path of a single tile.

use clap::Args;
use tileviewer::config::ConfigFile;
use tileviewer::coord::TileCoord;
use tileviewer::loader::ConfigSource;
use tracing::warn;

use super::common::{initialize_viewer, resolve_source, ConsoleDisplay};
use crate::error::CliError;

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Viewer base URL or directory containing info.json (default: viewer.source)
    pub source: Option<String>,

    /// Layer id (default: the viewer's initial layer)
    #[arg(long)]
    pub layer: Option<String>,

    /// Zoom level
    #[arg(long)]
    pub zoom: u8,

    /// Tile column (X)
    #[arg(long)]
    pub column: u32,

    /// Tile row (Y)
    #[arg(long)]
    pub row: u32,

    /// Prefix the path with the viewer location
    #[arg(long)]
    pub full: bool,

    /// HTTP timeout in seconds (default: viewer.timeout)
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Run the resolve command.
pub fn run(args: ResolveArgs, config: &ConfigFile) -> Result<(), CliError> {
    let source = resolve_source(args.source, config)?;
    let timeout = args.timeout.unwrap_or(config.viewer.timeout);

    let mut display = ConsoleDisplay::quiet();
    let session = initialize_viewer(source.clone(), timeout, &mut display)?;
    let Some(registry) = session.registry() else {
        return Err(CliError::Config("viewer has no registered layers".to_string()));
    };

    let layer_id = args
        .layer
        .unwrap_or_else(|| registry.initial_layer().to_string());
    let coord = TileCoord::new(args.column, args.row, args.zoom);
    let path = registry.tile_url(&layer_id, coord)?;

    if let Some(layer) = registry.layer(&layer_id) {
        if !layer.supports_zoom(coord.zoom()) {
            warn!(
                layer = %layer_id,
                zoom = coord.zoom(),
                min_zoom = layer.min_zoom(),
                max_zoom = layer.max_zoom(),
                "Zoom level outside the layer's declared range; tile may not exist"
            );
        }
    }

    if args.full {
        println!("{}", join_location(&source, &path));
    } else {
        println!("{}", path);
    }

    Ok(())
}

/// Join a relative tile path onto the viewer location.
fn join_location(source: &ConfigSource, path: &str) -> String {
    match source {
        ConfigSource::Url(base) => format!("{}/{}", base, path),
        ConfigSource::Directory(dir) => dir.join(path).display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_join_url() {
        let source = ConfigSource::Url("http://localhost:8000/world".to_string());
        assert_eq!(
            join_location(&source, "day/zoom3/5.9.png"),
            "http://localhost:8000/world/day/zoom3/5.9.png"
        );
    }

    #[test]
    fn test_join_directory() {
        let source = ConfigSource::Directory(PathBuf::from("/srv/www"));
        assert_eq!(
            join_location(&source, "day/zoom3/5.9.png"),
            "/srv/www/day/zoom3/5.9.png"
        );
    }
}
