//! Show command - load a viewer and list its layers.

use clap::Args;
use console::style;
use tileviewer::config::ConfigFile;
use tileviewer::registry::LayerTable;

use super::common::{initialize_viewer, resolve_source, ConsoleDisplay};
use crate::error::CliError;

/// Arguments for the show command.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Viewer base URL or directory containing info.json (default: viewer.source)
    pub source: Option<String>,

    /// HTTP timeout in seconds (default: viewer.timeout)
    #[arg(long)]
    pub timeout: Option<u64>,
}

/// Run the show command.
pub fn run(args: ShowArgs, config: &ConfigFile) -> Result<(), CliError> {
    let source = resolve_source(args.source, config)?;
    let timeout = args.timeout.unwrap_or(config.viewer.timeout);

    println!("Viewer: {}", source.document_location());

    let mut display = ConsoleDisplay::default();
    let session = initialize_viewer(source, timeout, &mut display)?;

    print_layers(session.viewer());
    Ok(())
}

/// Print the layer control as the host would lay it out.
fn print_layers(viewer: &LayerTable) {
    let id_width = viewer.layers().map(|l| l.id().len()).max().unwrap_or(0);
    let name_width = viewer.layers().map(|l| l.name().len()).max().unwrap_or(0);

    println!();
    println!("Layers:");
    for id in viewer.selectable_layers() {
        let Some(layer) = viewer.layer(id) else {
            continue;
        };

        let active = viewer.active_layer() == Some(id.as_str());
        let marker = if active { "*" } else { " " };
        let line = format!(
            "  {} {:<id_width$}  {:<name_width$}  zoom {}-{}  {}x{}px",
            marker,
            layer.id(),
            layer.name(),
            layer.min_zoom(),
            layer.max_zoom(),
            layer.tile_size().0,
            layer.tile_size().1,
        );

        if active {
            println!("{}", style(line).bold());
        } else {
            println!("{}", line);
        }
    }
}
