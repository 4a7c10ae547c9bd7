//! Tool settings stored in `~/.tileviewer/config.ini`.
//!
//! These settings configure the command-line host (where to find a viewer,
//! how long to wait for it, where to log). They are unrelated to the
//! viewer's own `info.json` document.
//!
//! ```ini
//! [viewer]
//! source = https://maps.example.com/world
//! timeout = 30
//!
//! [logging]
//! directory = ~/.tileviewer/logs
//! file = tileviewer.log
//! ```

mod file;
mod keys;
mod parser;
mod writer;

pub use file::{
    config_directory, config_file_path, ConfigFile, ConfigFileError, LoggingSettings,
    ViewerSettings, DEFAULT_LOG_FILE,
};
pub use keys::{ConfigKey, ConfigKeyError};
