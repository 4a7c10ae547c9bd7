//! Where the configuration document comes from.

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Fixed name of the configuration document.
pub const INFO_FILENAME: &str = "info.json";

/// Base location of a viewer: the directory holding `info.json` and the
/// tile tree, either remote or local.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Base URL served over HTTP(S).
    Url(String),
    /// Local directory.
    Directory(PathBuf),
}

impl ConfigSource {
    /// Location of the configuration document within this source.
    pub fn document_location(&self) -> String {
        match self {
            ConfigSource::Url(base) => format!("{}/{}", base.trim_end_matches('/'), INFO_FILENAME),
            ConfigSource::Directory(dir) => dir.join(INFO_FILENAME).display().to_string(),
        }
    }

    /// Path of the configuration document, for local sources.
    pub fn document_path(&self) -> Option<PathBuf> {
        match self {
            ConfigSource::Url(_) => None,
            ConfigSource::Directory(dir) => Some(dir.join(INFO_FILENAME)),
        }
    }
}

impl FromStr for ConfigSource {
    type Err = Infallible;

    /// Parse a source from a CLI argument or config value.
    ///
    /// `http://` and `https://` prefixes select a URL; anything else is a
    /// directory. A trailing `info.json` is stripped in both cases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let lower = s.to_lowercase();

        if lower.starts_with("http://") || lower.starts_with("https://") {
            let trimmed = s.trim_end_matches('/');
            let suffix = format!("/{}", INFO_FILENAME);
            let base = trimmed.strip_suffix(suffix.as_str()).unwrap_or(trimmed);
            return Ok(ConfigSource::Url(base.to_string()));
        }

        let path = Path::new(s);
        let dir = if path.file_name().is_some_and(|name| name == INFO_FILENAME) {
            path.parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."))
                .to_path_buf()
        } else {
            path.to_path_buf()
        };
        Ok(ConfigSource::Directory(dir))
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Url(base) => write!(f, "{}", base),
            ConfigSource::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}
