//! Speech engine abstraction
//!
//! Every voice, playback and export request from the window goes through
//! the [`SpeechEngine`] trait, so the handlers never know which backend is
//! actually producing audio.

use crate::state::config::Config;
use crate::{Result, StasyanError};
use log::info;
use std::path::Path;

/// A synthesis voice offered by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voice {
    /// Backend-specific identifier passed back to the engine
    pub id: String,
    /// Human-readable name shown in the voice list
    pub name: String,
    /// Language tag, when the backend reports one
    pub language: Option<String>,
}

impl Voice {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            language: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

/// Text-to-speech engine trait
///
/// All calls are synchronous: `speak_and_wait` and `save_to_file` return
/// only once the audio has finished playing or the file is fully written.
pub trait SpeechEngine {
    /// Short backend name for logs
    fn backend_name(&self) -> &'static str;

    /// List voices in the order the engine reports them
    fn voices(&mut self) -> Result<Vec<Voice>>;

    /// Make `voice` the active voice for later speech
    fn set_voice(&mut self, voice: &Voice) -> Result<()>;

    /// Set speech rate (0-100, where 50 is normal)
    fn set_rate(&mut self, rate: u8) -> Result<()>;

    /// Set speech volume (0-100)
    fn set_volume(&mut self, volume: u8) -> Result<()>;

    /// Speak text and block until playback completes
    fn speak_and_wait(&mut self, text: &str) -> Result<()>;

    /// Synthesize text into an audio file at `path`
    fn save_to_file(&mut self, text: &str, path: &Path) -> Result<()>;
}

/// Create the best available speech engine
///
/// espeak-ng is preferred because it can also write audio files. When it
/// is missing, the platform speech service is used through the `tts` crate
/// and saving is unavailable.
pub fn create_engine(config: &Config) -> Result<Box<dyn SpeechEngine>> {
    use super::backends::espeak::EspeakEngine;
    use super::backends::native::NativeEngine;

    info!("Trying espeak-ng backend...");
    match EspeakEngine::new(config.espeak_path().as_deref()) {
        Ok(engine) => {
            info!("✓ Successfully initialized espeak-ng backend");
            return Ok(Box::new(engine));
        }
        Err(e) => {
            info!("✗ espeak-ng backend unavailable: {}", e);
        }
    }

    info!("Trying native TTS backend...");
    match NativeEngine::new() {
        Ok(engine) => {
            info!("✓ Successfully initialized native TTS backend");
            Ok(Box::new(engine))
        }
        Err(e) => Err(StasyanError::Speech(format!(
            "No speech backend available on '{}'. Tried:\n\
             1. espeak-ng (install: sudo apt install espeak-ng)\n\
             2. Native platform TTS\n\
             Error: {}",
            std::env::consts::OS,
            e
        ))),
    }
}
