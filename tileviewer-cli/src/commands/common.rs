//! Common types and utilities shared across CLI commands.

use std::future::Future;

use console::style;
use tileviewer::config::ConfigFile;
use tileviewer::loader::{ConfigSource, SourceLoader};
use tileviewer::registry::LayerTable;
use tileviewer::session::{StatusDisplay, ViewerSession};

use crate::error::CliError;

/// Resolve the viewer location from the CLI argument or the config file.
pub fn resolve_source(cli_source: Option<String>, config: &ConfigFile) -> Result<ConfigSource, CliError> {
    // CLI takes precedence, then config
    let raw = cli_source
        .or_else(|| config.viewer.source.clone())
        .ok_or(CliError::NoSource)?;

    match raw.parse::<ConfigSource>() {
        Ok(source) => Ok(source),
        Err(never) => match never {},
    }
}

/// Run a future to completion on a single-threaded runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;

    Ok(runtime.block_on(future))
}

/// Load the viewer at `source` into a fresh in-memory host.
pub fn initialize_viewer<D: StatusDisplay>(
    source: ConfigSource,
    timeout_secs: u64,
    display: &mut D,
) -> Result<ViewerSession<LayerTable>, CliError> {
    let loader = SourceLoader::from_source(source, timeout_secs)?;
    let mut session = ViewerSession::new(LayerTable::new());

    block_on(session.initialize(&loader, display))??;

    Ok(session)
}

/// Status display printing to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleDisplay {
    quiet: bool,
}

impl ConsoleDisplay {
    /// A display that prints nothing, for commands with their own output.
    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl StatusDisplay for ConsoleDisplay {
    fn set_time_label(&mut self, label: &str) {
        if !self.quiet {
            println!("Rendered: {}", label);
        }
    }

    fn show_ready(&mut self) {
        if !self.quiet {
            println!("{}", style("Ready").green().bold());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_source_overrides_config() {
        let mut config = ConfigFile::default();
        config.viewer.source = Some("/srv/www".to_string());

        let source = resolve_source(Some("http://localhost:8000".to_string()), &config).unwrap();
        assert_eq!(source, ConfigSource::Url("http://localhost:8000".to_string()));
    }

    #[test]
    fn test_falls_back_to_configured_source() {
        let mut config = ConfigFile::default();
        config.viewer.source = Some("/srv/www".to_string());

        let source = resolve_source(None, &config).unwrap();
        assert_eq!(source, ConfigSource::Directory(PathBuf::from("/srv/www")));
    }

    #[test]
    fn test_no_source_is_error() {
        let config = ConfigFile::default();
        assert!(matches!(resolve_source(None, &config), Err(CliError::NoSource)));
    }

    #[test]
    fn test_initialize_from_directory() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("info.json"),
            r#"{"tileSize":256,"time":"May 1, 2024","types":[{"id":"day","name":"Day","minZoom":0,"maxZoom":4}]}"#,
        )
        .unwrap();

        let source = ConfigSource::Directory(temp.path().to_path_buf());
        let mut display = ConsoleDisplay::quiet();
        let session = initialize_viewer(source, 5, &mut display).unwrap();

        assert_eq!(session.viewer().active_layer(), Some("day"));
    }
}
