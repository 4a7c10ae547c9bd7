//! `info.json` assembly.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use super::{scan_zoom_levels, InfoError};
use crate::layer::{LayerDescriptor, ViewerConfig};
use crate::loader::INFO_FILENAME;

/// A rendered layer directory and its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSource {
    /// Directory name under the www root; becomes the layer id.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl LayerSource {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl FromStr for LayerSource {
    type Err = InfoError;

    /// Parse `id=Name`. A bare `id` uses the id as its name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, name) = match s.split_once('=') {
            Some((id, name)) => (id.trim(), name.trim()),
            None => (s.trim(), s.trim()),
        };

        if id.is_empty() || name.is_empty() {
            return Err(InfoError::InvalidLayerSpec(s.to_string()));
        }

        Ok(Self::new(id, name))
    }
}

/// Format a date the way the viewer shows it: `March 5, 2024`.
pub fn format_time_label(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Builds the configuration document for a rendered tile tree.
#[derive(Debug, Clone)]
pub struct InfoBuilder {
    www_dir: PathBuf,
    tile_size: u32,
    api_key: Option<String>,
    time: Option<String>,
    layers: Vec<LayerSource>,
}

impl InfoBuilder {
    /// Create a builder for the tile tree rooted at `www_dir`.
    pub fn new(www_dir: impl Into<PathBuf>, tile_size: u32) -> Self {
        Self {
            www_dir: www_dir.into(),
            tile_size,
            api_key: None,
            time: None,
            layers: Vec::new(),
        }
    }

    /// Include a map API key in the document.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Use a fixed time label instead of today's date.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    /// Append a layer. Layers keep the order they are added in.
    pub fn layer(mut self, layer: LayerSource) -> Self {
        self.layers.push(layer);
        self
    }

    /// Scan the layer directories and assemble the document.
    ///
    /// # Errors
    ///
    /// Fails if a layer directory cannot be read, has no zoom levels, or
    /// the resulting document is invalid (no layers, duplicate ids, ...).
    pub fn build(&self) -> Result<ViewerConfig, InfoError> {
        let mut types = Vec::with_capacity(self.layers.len());

        for layer in &self.layers {
            let dir = self.www_dir.join(&layer.id);
            let levels = scan_zoom_levels(&dir)?;

            let (min_zoom, max_zoom) = match (levels.first(), levels.last()) {
                (Some(&min), Some(&max)) => (min, max),
                _ => {
                    return Err(InfoError::NoZoomLevels {
                        id: layer.id.clone(),
                        path: dir,
                    })
                }
            };

            debug!(id = %layer.id, min_zoom, max_zoom, "Scanned layer directory");
            types.push(LayerDescriptor::new(&layer.id, &layer.name, min_zoom, max_zoom));
        }

        let time = self
            .time
            .clone()
            .unwrap_or_else(|| format_time_label(Local::now().date_naive()));

        let config = ViewerConfig {
            api_key: self.api_key.clone(),
            tile_size: self.tile_size,
            time,
            types,
        };
        config.validate()?;

        Ok(config)
    }

    /// Build the document and save it as `<www_dir>/info.json`.
    pub fn write(&self) -> Result<ViewerConfig, InfoError> {
        let config = self.build()?;
        let path = self.document_path();

        let json = serde_json::to_string(&config)?;
        std::fs::write(&path, json).map_err(|source| InfoError::Io {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), layers = config.types.len(), "Configuration document written");
        Ok(config)
    }

    /// Where [`write`](Self::write) saves the document.
    pub fn document_path(&self) -> PathBuf {
        self.www_dir.join(INFO_FILENAME)
    }

    /// Root of the tile tree.
    pub fn www_dir(&self) -> &Path {
        &self.www_dir
    }
}
