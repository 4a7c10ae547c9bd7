//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::file::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let source = config.viewer.source.as_deref().unwrap_or("");

    format!(
        r#"[viewer]
; Default viewer location: a base URL (http:// or https://) or a local
; directory. Either must contain info.json next to the tile tree.
source = {}
; Seconds to wait for info.json over HTTP
timeout = {}

[logging]
; Directory for log files
directory = {}
; Log file name (cleared at the start of every session)
file = {}
"#,
        source,
        config.viewer.timeout,
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

/// Display a path, abbreviating the home directory to `~`.
pub(super) fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_both_sections() {
        let content = to_config_string(&ConfigFile::default());
        assert!(content.contains("[viewer]"));
        assert!(content.contains("[logging]"));
        assert!(content.contains("timeout = 30"));
        assert!(content.contains("file = tileviewer.log"));
    }

    #[test]
    fn test_unset_source_is_blank() {
        let content = to_config_string(&ConfigFile::default());
        assert!(content.contains("source = \n"));
    }
}
