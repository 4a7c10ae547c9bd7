//! Viewer initialization lifecycle.
//!
//! A session moves through three states, once, in order:
//!
//! ```text
//! Unloaded ──load──► Loaded ──register──► Registered
//! ```
//!
//! Loading is the only suspension point. Registration and the status
//! display updates that follow it are synchronous. Any failure leaves the
//! session where it stopped; nothing is retried and the display is not
//! touched.

mod display;
mod lifecycle;

pub use display::{StatusDisplay, StatusLog};
pub use lifecycle::{SessionError, SessionState, ViewerSession};
