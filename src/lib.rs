//! Stasyan - desktop text-to-speech reader
//!
//! Type or load text, pick a voice, listen to it, or save it as an audio
//! file. The window is a thin shell over the handlers in [`actions`].

pub mod actions;
pub mod error;
pub mod notify;
pub mod picker;
pub mod speech;
pub mod state;
pub mod ui;

pub use error::{Result, StasyanError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "stasyan";
