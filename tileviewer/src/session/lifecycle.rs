//! Session state machine.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::StatusDisplay;
use crate::layer::ConfigError;
use crate::loader::{ConfigLoader, LoadError};
use crate::registry::{LayerRegistry, TileViewer};

/// Where a session is in its one-shot initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No configuration document yet.
    Unloaded,
    /// Document loaded, layers not registered.
    Loaded,
    /// Layers registered with the host viewer.
    Registered,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Unloaded => write!(f, "unloaded"),
            SessionState::Loaded => write!(f, "loaded"),
            SessionState::Registered => write!(f, "registered"),
        }
    }
}

/// Errors that stop a session from initializing.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The configuration document could not be fetched or parsed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The configuration document violates an invariant.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The session already registered its layers.
    #[error("Session is already initialized")]
    AlreadyInitialized,

    /// An earlier attempt loaded the document but failed to register it.
    /// A fresh session is needed to try again.
    #[error("Session cannot initialize after a failed attempt (state '{0}')")]
    PreviousAttemptFailed(SessionState),
}

/// A viewer session owning the injected host viewer.
pub struct ViewerSession<V: TileViewer> {
    viewer: V,
    state: SessionState,
    registry: Option<LayerRegistry>,
}

impl<V: TileViewer> ViewerSession<V> {
    /// Create an unloaded session around a host viewer.
    pub fn new(viewer: V) -> Self {
        Self {
            viewer,
            state: SessionState::Unloaded,
            registry: None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The host viewer.
    pub fn viewer(&self) -> &V {
        &self.viewer
    }

    /// Mutable access to the host viewer, e.g. for layer switching.
    pub fn viewer_mut(&mut self) -> &mut V {
        &mut self.viewer
    }

    /// The registered layer set, once the session is registered.
    pub fn registry(&self) -> Option<&LayerRegistry> {
        self.registry.as_ref()
    }

    /// Consume the session and return the host viewer.
    pub fn into_viewer(self) -> V {
        self.viewer
    }

    /// Load the configuration document, register its layers and update the
    /// status display.
    ///
    /// On failure the display is untouched and the session stays in the
    /// state it reached. Only an unloaded session can initialize.
    pub async fn initialize<L, D>(
        &mut self,
        loader: &L,
        display: &mut D,
    ) -> Result<&LayerRegistry, SessionError>
    where
        L: ConfigLoader,
        D: StatusDisplay + ?Sized,
    {
        match self.state {
            SessionState::Unloaded => {}
            SessionState::Registered => {
                warn!("Ignoring repeated initialization");
                return Err(SessionError::AlreadyInitialized);
            }
            state => {
                warn!(state = %state, "Ignoring initialization after a failed attempt");
                return Err(SessionError::PreviousAttemptFailed(state));
            }
        }

        debug!(location = %loader.location(), "Loading viewer configuration");
        let config = loader.load().await?;
        self.transition(SessionState::Loaded);

        let registry = crate::registry::register_layers(&mut self.viewer, &config)?;
        self.transition(SessionState::Registered);

        display.set_time_label(&config.time);
        display.show_ready();
        info!(
            time = %config.time,
            active = registry.initial_layer(),
            "Viewer ready"
        );

        Ok(self.registry.insert(registry))
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = %self.state, to = %next, "Session state change");
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::TileCoord;
    use crate::layer::{LayerDescriptor, ViewerConfig};
    use crate::loader::HttpError;
    use crate::registry::LayerTable;
    use crate::session::StatusLog;

    /// Loader returning a canned outcome.
    struct StaticLoader {
        config: Option<ViewerConfig>,
    }

    impl ConfigLoader for StaticLoader {
        async fn load(&self) -> Result<ViewerConfig, LoadError> {
            self.config.clone().ok_or_else(|| LoadError::Fetch {
                url: "http://localhost/info.json".to_string(),
                source: HttpError::Request("connection refused".to_string()),
            })
        }

        fn location(&self) -> String {
            "static".to_string()
        }
    }

    fn base_config() -> ViewerConfig {
        ViewerConfig::new(
            256,
            "2024-01-01",
            vec![LayerDescriptor::new("base", "Base", 0, 5)],
        )
    }

    #[tokio::test]
    async fn test_initialize_registers_and_updates_display() {
        let loader = StaticLoader {
            config: Some(base_config()),
        };
        let mut display = StatusLog::default();
        let mut session = ViewerSession::new(LayerTable::new());

        let registry = session.initialize(&loader, &mut display).await.unwrap();
        assert_eq!(registry.layer_ids(), ["base"]);

        assert_eq!(session.state(), SessionState::Registered);
        assert_eq!(display.time_label.as_deref(), Some("2024-01-01"));
        assert!(display.ready);
        assert_eq!(session.viewer().active_layer(), Some("base"));
        assert_eq!(
            session.viewer().tile_url(TileCoord::new(1, 1, 2)).as_deref(),
            Some("base/zoom2/1.1.png")
        );
    }

    #[tokio::test]
    async fn test_load_failure_leaves_session_unloaded() {
        let loader = StaticLoader { config: None };
        let mut display = StatusLog::default();
        let mut session = ViewerSession::new(LayerTable::new());

        let err = session.initialize(&loader, &mut display).await.unwrap_err();
        assert!(matches!(err, SessionError::Load(_)));
        assert_eq!(session.state(), SessionState::Unloaded);
        assert_eq!(display, StatusLog::default());
        assert!(session.viewer().is_empty());
        assert!(session.registry().is_none());
    }

    #[tokio::test]
    async fn test_invalid_config_stops_after_load() {
        let loader = StaticLoader {
            config: Some(ViewerConfig::new(256, "2024-01-01", vec![])),
        };
        let mut display = StatusLog::default();
        let mut session = ViewerSession::new(LayerTable::new());

        let err = session.initialize(&loader, &mut display).await.unwrap_err();
        assert!(matches!(err, SessionError::Config(ConfigError::NoLayers)));
        assert_eq!(session.state(), SessionState::Loaded);
        assert!(!display.ready);
        assert!(session.viewer().is_empty());
    }

    #[tokio::test]
    async fn test_second_initialize_is_rejected() {
        let loader = StaticLoader {
            config: Some(base_config()),
        };
        let mut display = StatusLog::default();
        let mut session = ViewerSession::new(LayerTable::new());

        session.initialize(&loader, &mut display).await.unwrap();
        let err = session.initialize(&loader, &mut display).await.unwrap_err();
        assert!(matches!(err, SessionError::AlreadyInitialized));
        assert_eq!(session.viewer().len(), 1);
    }

    #[tokio::test]
    async fn test_retry_after_invalid_config_is_rejected() {
        let loader = StaticLoader {
            config: Some(ViewerConfig::new(0, "2024-01-01", vec![])),
        };
        let mut display = StatusLog::default();
        let mut session = ViewerSession::new(LayerTable::new());

        session.initialize(&loader, &mut display).await.unwrap_err();
        let err = session.initialize(&loader, &mut display).await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::PreviousAttemptFailed(SessionState::Loaded)
        ));
        assert!(session.registry().is_none());
    }

    #[test]
    fn test_state_display() {
        assert_eq!(SessionState::Unloaded.to_string(), "unloaded");
        assert_eq!(SessionState::Registered.to_string(), "registered");
    }
}
