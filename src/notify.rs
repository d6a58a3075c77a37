//! Modal message dialogs

use log::debug;
use rfd::{MessageButtons, MessageDialog, MessageLevel};
use std::str::FromStr;

/// Icon shown on a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Question,
    Information,
    Warning,
}

impl Severity {
    /// Closest native message level
    ///
    /// Native dialogs have no question icon; questions use the information
    /// level.
    fn level(self) -> MessageLevel {
        match self {
            Severity::Critical => MessageLevel::Error,
            Severity::Question | Severity::Information => MessageLevel::Info,
            Severity::Warning => MessageLevel::Warning,
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    /// Parse the short codes `Crit`, `Quest`, `Inf` and `Warn`
    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "Crit" => Ok(Severity::Critical),
            "Quest" => Ok(Severity::Question),
            "Inf" => Ok(Severity::Information),
            "Warn" => Ok(Severity::Warning),
            other => Err(format!("Unknown dialog severity '{}'", other)),
        }
    }
}

/// Something that can show the user a message and wait for them
pub trait Notifier {
    /// Show a modal dialog; returns once the user dismissed it
    fn notify(&mut self, title: &str, message: &str, severity: Severity);
}

/// Native OS message box
#[derive(Debug, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn notify(&mut self, title: &str, message: &str, severity: Severity) {
        debug!("Showing {:?} dialog: {}", severity, title);
        let _ = MessageDialog::new()
            .set_title(title)
            .set_description(message)
            .set_level(severity.level())
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
