//! UI event handlers
//!
//! Each window event maps to one handler function taking the explicit
//! [`AppContext`]. Handlers run on the UI thread and block it while the
//! engine works.

pub mod exporter;
pub mod loader;
pub mod speaker;
pub mod voices;

pub use exporter::{save, saved_file_name};
pub use loader::load_text;
pub use speaker::listen;
pub use voices::select_voice;

use crate::notify::Severity;
use crate::state::AppContext;
use crate::Result;
use log::{debug, error};

/// Events the window raises
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// "Listen" button
    Listen,
    /// "Save" button
    Save,
    /// "Load Text" button
    LoadText,
    /// A voice list entry was clicked (display name)
    VoiceClicked(String),
}

/// Title and message shown when there is no text to act on
pub(crate) const NOTHING_TO_READ: (&str, &str) = (
    "Why?",
    "There is no text, what were you going to listen to?",
);

/// Run the handler registered for `event`
pub fn handle(ctx: &mut AppContext, event: UiEvent) -> Result<()> {
    debug!("Handling {:?}", event);
    match event {
        UiEvent::Listen => listen(ctx),
        UiEvent::Save => save(ctx).map(|_| ()),
        UiEvent::LoadText => load_text(ctx).map(|_| ()),
        UiEvent::VoiceClicked(name) => select_voice(ctx, &name).map(|_| ()),
    }
}

/// Run a handler and report any failure with a critical dialog
///
/// The window keeps running after a failed action.
pub fn dispatch(ctx: &mut AppContext, event: UiEvent) {
    if let Err(e) = handle(ctx, event.clone()) {
        error!("{:?} failed: {}", event, e);
        ctx.notifier.notify("Error", &e.to_string(), Severity::Critical);
    }
}

/// Shared emptiness guard for Listen and Save
///
/// Returns true (after warning the user) when there is nothing to speak.
pub(crate) fn warn_if_empty(ctx: &mut AppContext) -> bool {
    if ctx.text.is_empty() {
        let (title, message) = NOTHING_TO_READ;
        ctx.notifier.notify(title, message, Severity::Warning);
        return true;
    }
    false
}
