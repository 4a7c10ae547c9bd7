//! Host display elements updated after initialization.

/// The host's status elements.
///
/// Both writes are one-way; nothing flows back into the session.
pub trait StatusDisplay {
    /// Show the configuration document's time label.
    fn set_time_label(&mut self, label: &str);

    /// Reveal the "ready" indicator.
    fn show_ready(&mut self);
}

/// A [`StatusDisplay`] that just remembers what was written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatusLog {
    pub time_label: Option<String>,
    pub ready: bool,
}

impl StatusDisplay for StatusLog {
    fn set_time_label(&mut self, label: &str) {
        self.time_label = Some(label.to_string());
    }

    fn show_ready(&mut self) {
        self.ready = true;
    }
}
