//! Build-info command - write info.json for a rendered tile tree.

use std::path::PathBuf;

use clap::Args;
use tileviewer::info::{InfoBuilder, LayerSource};

use crate::error::CliError;

/// Arguments for the build-info command.
#[derive(Debug, Args)]
pub struct BuildInfoArgs {
    /// Root of the rendered tile tree (info.json is written here)
    pub www_dir: PathBuf,

    /// Layer as id=Name, where id is a directory under WWW_DIR (repeatable, in display order)
    #[arg(long = "layer", required = true, value_parser = parse_layer)]
    pub layers: Vec<LayerSource>,

    /// Tile edge length in pixels
    #[arg(long, default_value = "256")]
    pub tile_size: u32,

    /// Map API key to include in the document
    #[arg(long)]
    pub api_key: Option<String>,

    /// Time label (default: today's date, e.g. "March 5, 2024")
    #[arg(long)]
    pub time: Option<String>,
}

fn parse_layer(s: &str) -> Result<LayerSource, String> {
    s.parse().map_err(|e: tileviewer::info::InfoError| e.to_string())
}

/// Run the build-info command.
pub fn run(args: BuildInfoArgs) -> Result<(), CliError> {
    let mut builder = InfoBuilder::new(&args.www_dir, args.tile_size);
    if let Some(key) = args.api_key {
        builder = builder.with_api_key(key);
    }
    if let Some(time) = args.time {
        builder = builder.with_time(time);
    }
    for layer in args.layers {
        builder = builder.layer(layer);
    }

    let config = builder.write()?;

    println!("Saved {}", builder.document_path().display());
    println!("  Time: {}", config.time);
    for layer in &config.types {
        println!(
            "  {} ({}): zoom {}-{}",
            layer.id, layer.name, layer.min_zoom, layer.max_zoom
        );
    }

    Ok(())
}
