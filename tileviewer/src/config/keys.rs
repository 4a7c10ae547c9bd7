//! Configuration key access and validation.
//!
//! Provides a type-safe interface for getting and setting configuration
//! values by `section.key` name.

use std::path::Path;
use std::str::FromStr;

use ini::Ini;
use thiserror::Error;

use super::file::{ConfigFile, ConfigFileError};
use super::parser::{expand_tilde, parse_timeout};
use super::writer::path_to_string;
use crate::loader::ConfigSource;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },

    /// The settings file could not be read or written.
    #[error(transparent)]
    File(#[from] ConfigFileError),
}

/// Supported configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ViewerSource,
    ViewerTimeout,
    LoggingDirectory,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "viewer.source" => Ok(ConfigKey::ViewerSource),
            "viewer.timeout" => Ok(ConfigKey::ViewerTimeout),
            "logging.directory" => Ok(ConfigKey::LoggingDirectory),
            "logging.file" => Ok(ConfigKey::LoggingFile),
            _ => Err(ConfigKeyError::UnknownKey(s.to_string())),
        }
    }
}

impl ConfigKey {
    /// All keys, in the order they appear in the file.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::ViewerSource,
            ConfigKey::ViewerTimeout,
            ConfigKey::LoggingDirectory,
            ConfigKey::LoggingFile,
        ]
    }

    /// Get the canonical key name (e.g., "viewer.source").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::ViewerSource => "viewer.source",
            ConfigKey::ViewerTimeout => "viewer.timeout",
            ConfigKey::LoggingDirectory => "logging.directory",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "viewer").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "source").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::ViewerSource => config.viewer.source.clone().unwrap_or_default(),
            ConfigKey::ViewerTimeout => config.viewer.timeout.to_string(),
            ConfigKey::LoggingDirectory => path_to_string(&config.logging.directory),
            ConfigKey::LoggingFile => config.logging.file.clone(),
        }
    }

    /// Set the value in a config file, validating it first.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let value = value.trim();

        match self {
            ConfigKey::ViewerSource => {
                config.viewer.source = if value.is_empty() {
                    None
                } else {
                    // Normalize so a trailing info.json is not stored
                    let source: ConfigSource = match value.parse() {
                        Ok(source) => source,
                        Err(never) => match never {},
                    };
                    Some(source.to_string())
                };
            }
            ConfigKey::ViewerTimeout => {
                config.viewer.timeout = parse_timeout(value)
                    .ok_or_else(|| self.invalid("must be a positive number of seconds"))?;
            }
            ConfigKey::LoggingDirectory => {
                if value.is_empty() {
                    return Err(self.invalid("must not be empty"));
                }
                config.logging.directory = expand_tilde(value);
            }
            ConfigKey::LoggingFile => {
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(self.invalid("must be a plain file name"));
                }
                config.logging.file = value.to_string();
            }
        }

        Ok(())
    }

    /// Validate `value` and write it to the settings file at `path`.
    ///
    /// Every other entry in the file is kept. If another entry holds an
    /// invalid value, only this key's line is rewritten, so a broken file
    /// can be repaired one key at a time.
    pub fn store(&self, path: &Path, value: &str) -> Result<(), ConfigKeyError> {
        let mut scratch = ConfigFile::default();
        self.set(&mut scratch, value)?;

        match ConfigFile::load_from(path) {
            Ok(mut config) => {
                self.set(&mut config, value)?;
                config.save_to(path)?;
            }
            Err(ConfigFileError::InvalidValue { .. }) => {
                let mut ini = Ini::load_from_file(path).map_err(ConfigFileError::from)?;
                ini.with_section(Some(self.section()))
                    .set(self.key_name(), self.get(&scratch));
                ini.write_to_file(path)
                    .map_err(|e| ConfigFileError::WriteError(e.to_string()))?;
            }
            Err(e) => return Err(e.into()),
        }

        Ok(())
    }

    fn invalid(&self, reason: &str) -> ConfigKeyError {
        ConfigKeyError::ValidationFailed {
            key: self.name().to_string(),
            reason: reason.to_string(),
        }
    }
}
