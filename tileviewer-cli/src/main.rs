//! TileViewer CLI - Command-line interface
//!
//! A headless host for configuration-driven tile viewers: loads a viewer's
//! `info.json`, registers its layers, resolves tile paths and writes new
//! configuration documents for rendered tile trees.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tileviewer::config::ConfigFile;
use tileviewer::logging::{init_logging, LoggingGuard};

use commands::build_info::BuildInfoArgs;
use commands::config::ConfigCommands;
use commands::resolve::ResolveArgs;
use commands::show::ShowArgs;
use error::CliError;

#[derive(Parser)]
#[command(name = "tileviewer")]
#[command(version, about = "Inspect and prepare configuration-driven map tile viewers", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a viewer's configuration and list its layers
    Show(ShowArgs),

    /// Resolve the path of a single tile
    Resolve(ResolveArgs),

    /// Write info.json for a rendered tile tree
    BuildInfo(BuildInfoArgs),

    /// View or change tool settings
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let verbose = cli.verbose;

    match cli.command {
        Commands::Show(args) => with_logging(verbose, |config| commands::show::run(args, config)),
        Commands::Resolve(args) => {
            with_logging(verbose, |config| commands::resolve::run(args, config))
        }
        Commands::BuildInfo(args) => with_logging(verbose, |_| commands::build_info::run(args)),
        Commands::Config(command) => commands::config::run(command),
    }
}

/// Load tool settings, start logging, then run the command.
fn with_logging<F>(verbose: bool, command: F) -> Result<(), CliError>
where
    F: FnOnce(&ConfigFile) -> Result<(), CliError>,
{
    let config = ConfigFile::load()?;
    let _guard = start_logging(&config, verbose)?;
    command(&config)
}

fn start_logging(config: &ConfigFile, verbose: bool) -> Result<LoggingGuard, CliError> {
    let level = if verbose { "debug" } else { "warn" };
    init_logging(&config.logging.directory, &config.logging.file, level)
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}
