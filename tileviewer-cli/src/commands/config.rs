//! `tileviewer config` - inspect and change `~/.tileviewer/config.ini`.
//!
//! Reads fail loudly on an invalid file, the same way `show` and `resolve`
//! do. `set` is the exception: it rewrites only the key it is given, which
//! is how a broken entry gets repaired.

use std::path::Path;

use clap::Subcommand;
use console::style;
use tileviewer::config::{config_file_path, ConfigFile, ConfigKey, ConfigKeyError};

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one setting
    Get {
        /// Setting as section.key (e.g., viewer.source)
        key: String,
    },

    /// Change one setting, keeping the rest of the file
    Set {
        /// Setting as section.key (e.g., viewer.timeout)
        key: String,

        /// New value (empty clears viewer.source)
        value: String,
    },

    /// Print every setting, marking those left at their default
    List,

    /// Print the settings file location
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    let path = config_file_path();

    match command {
        ConfigCommands::Get { key } => {
            let key = parse_key(&key)?;
            let config = ConfigFile::load_from(&path)?;
            println!("{}", display_value(&key.get(&config)));
        }
        ConfigCommands::Set { key, value } => {
            let key = parse_key(&key)?;
            key.store(&path, &value).map_err(|e| match e {
                ConfigKeyError::File(e) => CliError::ConfigFile(e),
                other => CliError::Config(other.to_string()),
            })?;
            println!("{} = {}", key.name(), display_value(value.trim()));
        }
        ConfigCommands::List => {
            let config = ConfigFile::load_from(&path)?;
            print!("{}", render_list(&config));
        }
        ConfigCommands::Path => print_path(&path),
    }

    Ok(())
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        let known: Vec<_> = ConfigKey::all().iter().map(|k| k.name()).collect();
        CliError::Config(format!(
            "Unknown setting '{}' (expected one of: {})",
            key,
            known.join(", ")
        ))
    })
}

fn display_value(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}

/// One line per key, names aligned, defaults marked.
fn render_list(config: &ConfigFile) -> String {
    let defaults = ConfigFile::default();
    let width = ConfigKey::all()
        .iter()
        .map(|k| k.name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for key in ConfigKey::all() {
        let value = key.get(config);
        let marker = if value == key.get(&defaults) {
            "  (default)"
        } else {
            ""
        };
        out.push_str(&format!(
            "{:<width$}  {}{}\n",
            key.name(),
            display_value(&value),
            marker
        ));
    }
    out
}

fn print_path(path: &Path) {
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("{}", style("(not created yet; defaults in use)").dim());
    }
}
