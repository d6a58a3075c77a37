//! Native Rust TTS backend using the tts crate
//!
//! This backend uses the `tts` crate which provides a unified interface to:
//! - Speech Dispatcher on Linux (via native bindings)
//! - AVFoundation on macOS/iOS (via native bindings)
//! - WinRT / SAPI on Windows
//!
//! None of those services expose "render to file", so saving is reported
//! as unsupported.

use crate::speech::{SpeechEngine, Voice};
use crate::{Result, StasyanError};
use log::{debug, error, warn};
use std::path::Path;
use std::thread;
use std::time::Duration;
use tts::Tts as TtsCrate;

/// How often to poll the platform service while waiting for speech to end
const SPEAKING_POLL: Duration = Duration::from_millis(50);

/// Grace period for utterances to start before `is_speaking` is trusted
const START_GRACE: Duration = Duration::from_millis(200);

/// Native TTS backend using the tts crate
pub struct NativeEngine {
    /// The tts crate's TTS instance
    tts: TtsCrate,
}

impl NativeEngine {
    /// Create a new native TTS engine
    ///
    /// Initializes the platform-appropriate TTS backend
    pub fn new() -> Result<Self> {
        debug!("Creating native TTS backend");

        let tts = TtsCrate::default()
            .map_err(|e| StasyanError::Speech(format!("Failed to initialize TTS: {}", e)))?;

        debug!("Native TTS backend created successfully");
        Ok(Self { tts })
    }

    /// Convert rate (0-100) into the backend's own range
    fn convert_rate(rate: u8, min: f32, normal: f32, max: f32) -> f32 {
        if rate <= 50 {
            min + (normal - min) * (rate as f32 / 50.0)
        } else {
            normal + (max - normal) * ((rate - 50) as f32 / 50.0)
        }
    }

    /// Convert volume (0-100) to tts crate volume (0.0-1.0)
    fn convert_volume(volume: u8) -> f32 {
        volume as f32 / 100.0
    }

    fn tts_voices(&self) -> Result<Vec<tts::Voice>> {
        self.tts
            .voices()
            .map_err(|e| StasyanError::Speech(format!("Failed to get voices: {}", e)))
    }

    /// Block until the platform service reports it is done speaking
    fn wait_until_silent(&self) -> Result<()> {
        if !self.tts.supported_features().is_speaking {
            warn!("Speaking state not reported on this platform, returning immediately");
            return Ok(());
        }

        thread::sleep(START_GRACE);
        while self
            .tts
            .is_speaking()
            .map_err(|e| StasyanError::Speech(format!("Failed to query speech state: {}", e)))?
        {
            thread::sleep(SPEAKING_POLL);
        }
        Ok(())
    }
}

impl SpeechEngine for NativeEngine {
    fn backend_name(&self) -> &'static str {
        "native"
    }

    fn voices(&mut self) -> Result<Vec<Voice>> {
        if !self.tts.supported_features().voice {
            warn!("Voice selection not supported on this platform");
            return Ok(Vec::new());
        }

        let voices = self
            .tts_voices()?
            .into_iter()
            .map(|v| Voice::new(v.id(), v.name()).with_language(v.language().to_string()))
            .collect::<Vec<_>>();
        debug!("Native TTS reported {} voices", voices.len());
        Ok(voices)
    }

    fn set_voice(&mut self, voice: &Voice) -> Result<()> {
        debug!("Setting voice to {} ({})", voice.name, voice.id);

        let target = self
            .tts_voices()?
            .into_iter()
            .find(|v| v.id() == voice.id)
            .ok_or_else(|| {
                StasyanError::Speech(format!("Voice '{}' is no longer available", voice.id))
            })?;

        self.tts
            .set_voice(&target)
            .map_err(|e| StasyanError::Speech(format!("Failed to set voice: {}", e)))
    }

    fn set_rate(&mut self, rate: u8) -> Result<()> {
        debug!("Setting rate to {}", rate);

        if !self.tts.supported_features().rate {
            warn!("Rate control not supported on this platform");
            return Ok(());
        }

        let converted = Self::convert_rate(
            rate,
            self.tts.min_rate(),
            self.tts.normal_rate(),
            self.tts.max_rate(),
        );
        self.tts
            .set_rate(converted)
            .map_err(|e| StasyanError::Speech(format!("Failed to set rate: {}", e)))?;

        Ok(())
    }

    fn set_volume(&mut self, volume: u8) -> Result<()> {
        debug!("Setting volume to {}", volume);

        if !self.tts.supported_features().volume {
            warn!("Volume control not supported on this platform");
            return Ok(());
        }

        self.tts
            .set_volume(Self::convert_volume(volume))
            .map_err(|e| StasyanError::Speech(format!("Failed to set volume: {}", e)))?;

        Ok(())
    }

    fn speak_and_wait(&mut self, text: &str) -> Result<()> {
        debug!("Speaking {} chars", text.len());
        self.tts.speak(text, false).map_err(|e| {
            error!("Failed to speak: {}", e);
            StasyanError::Speech(format!("Speak failed: {}", e))
        })?;

        self.wait_until_silent()
    }

    fn save_to_file(&mut self, _text: &str, path: &Path) -> Result<()> {
        Err(StasyanError::Speech(format!(
            "The native speech backend cannot write audio files ({}). Install espeak-ng to enable saving.",
            path.display()
        )))
    }
}
