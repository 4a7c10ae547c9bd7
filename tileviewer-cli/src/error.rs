//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use tileviewer::config::ConfigFileError;
use tileviewer::info::InfoError;
use tileviewer::layer::ConfigError;
use tileviewer::loader::LoadError;
use tileviewer::registry::RegistryError;
use tileviewer::session::SessionError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Tool settings error
    Config(String),
    /// Failed to read or write the settings file
    ConfigFile(ConfigFileError),
    /// No viewer location given and none configured
    NoSource,
    /// Failed to create the async runtime
    Runtime(std::io::Error),
    /// Viewer initialization failed
    Session(SessionError),
    /// Tile lookup failed
    Registry(RegistryError),
    /// Failed to build info.json
    Info(InfoError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::NoSource => {
                eprintln!();
                eprintln!("Pass a URL or directory, or set a default with:");
                eprintln!("  tileviewer config set viewer.source <URL or directory>");
            }
            CliError::Session(SessionError::Load(LoadError::Read { .. })) => {
                eprintln!();
                eprintln!("The directory must contain info.json next to the tile tree.");
                eprintln!("Generate one with: tileviewer build-info <www-dir> --layer id=Name");
            }
            CliError::ConfigFile(ConfigFileError::InvalidValue { section, key, .. }) => {
                eprintln!();
                eprintln!("Repair the setting with:");
                eprintln!("  tileviewer config set {}.{} <value>", section, key);
            }
            CliError::Session(SessionError::Config(ConfigError::NoLayers)) => {
                eprintln!();
                eprintln!("info.json must list at least one entry under \"types\".");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::NoSource => write!(f, "No viewer location given"),
            CliError::Runtime(e) => write!(f, "Failed to create async runtime: {}", e),
            CliError::Session(e) => write!(f, "Viewer failed to initialize: {}", e),
            CliError::Registry(e) => write!(f, "{}", e),
            CliError::Info(e) => write!(f, "Failed to build info.json: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Runtime(e) => Some(e),
            CliError::Session(e) => Some(e),
            CliError::Registry(e) => Some(e),
            CliError::Info(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

impl From<SessionError> for CliError {
    fn from(e: SessionError) -> Self {
        CliError::Session(e)
    }
}

impl From<LoadError> for CliError {
    fn from(e: LoadError) -> Self {
        CliError::Session(SessionError::Load(e))
    }
}

impl From<RegistryError> for CliError {
    fn from(e: RegistryError) -> Self {
        CliError::Registry(e)
    }
}

impl From<InfoError> for CliError {
    fn from(e: InfoError) -> Self {
        CliError::Info(e)
    }
}
