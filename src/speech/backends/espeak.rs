//! espeak-ng backend
//!
//! Runs one espeak-ng process per request and waits for it to exit, which
//! gives the blocking playback the window expects. The same invocation with
//! `-w` writes the audio to a file instead of the sound card.
//!
//! Dependencies:
//! - espeak-ng (install with: sudo apt install espeak-ng)

use crate::speech::{SpeechEngine, Voice};
use crate::{Result, StasyanError};
use log::{debug, error, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// One row of `espeak-ng --voices`:
/// `Pty Language Age/Gender VoiceName File Other Languages`
static VOICE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\d+\s+(\S+)\s+\S+\s+(\S+)\s+\S+").expect("voice line pattern is valid")
});

/// Parse the voice table printed by `espeak-ng --voices`
///
/// Rows keep their printed order. The header and anything that does not
/// look like a voice row are skipped.
pub fn parse_voice_list(output: &str) -> Vec<Voice> {
    output
        .lines()
        .filter_map(|line| VOICE_LINE.captures(line))
        .map(|caps| {
            let language = caps[1].to_string();
            let name = caps[2].replace('_', " ");
            Voice::new(language.clone(), name).with_language(language)
        })
        .collect()
}

/// espeak-ng subprocess engine
pub struct EspeakEngine {
    /// Path to espeak-ng
    espeak_path: String,

    /// Active voice id (`-v`), engine default when unset
    voice: Option<String>,

    /// Cached rate setting (0-100)
    rate: Option<u8>,

    /// Cached volume setting (0-100)
    volume: Option<u8>,
}

impl EspeakEngine {
    /// Create a new espeak-ng engine
    ///
    /// `path` overrides the executable lookup; otherwise the usual
    /// locations are probed.
    pub fn new(path: Option<&str>) -> Result<Self> {
        debug!("Creating espeak-ng backend");

        let espeak_path = match path {
            Some(path) => Self::probe(path)
                .then(|| path.to_string())
                .ok_or_else(|| {
                    StasyanError::Speech(format!("espeak-ng not runnable at '{}'", path))
                })?,
            None => Self::find_espeak()?,
        };
        debug!("Found espeak-ng at: {}", espeak_path);

        Ok(Self {
            espeak_path,
            voice: None,
            rate: None,
            volume: None,
        })
    }

    fn probe(path: &str) -> bool {
        Command::new(path)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Find espeak-ng executable
    fn find_espeak() -> Result<String> {
        ["espeak-ng", "/usr/bin/espeak-ng", "/usr/local/bin/espeak-ng"]
            .into_iter()
            .find(|path| Self::probe(path))
            .map(str::to_string)
            .ok_or_else(|| {
                StasyanError::Speech(
                    "espeak-ng not found. Install with: sudo apt install espeak-ng".to_string(),
                )
            })
    }

    /// Convert rate (0-100) to espeak speed (80-450 wpm)
    fn rate_to_espeak_speed(rate: u8) -> u16 {
        80 + ((rate as u16) * 370 / 100)
    }

    /// Convert volume (0-100) to espeak amplitude (0-200)
    fn volume_to_espeak_amplitude(volume: u8) -> u8 {
        ((volume as u16 * 200) / 100) as u8
    }

    /// Build the argument list shared by playback and export
    fn synthesis_args(&self, output: Option<&Path>) -> Vec<String> {
        // -b 1: input is UTF-8
        let mut args = vec!["-b".to_string(), "1".to_string(), "--stdin".to_string()];

        if let Some(voice) = &self.voice {
            args.push("-v".to_string());
            args.push(voice.clone());
        }
        if let Some(rate) = self.rate {
            args.push("-s".to_string());
            args.push(Self::rate_to_espeak_speed(rate).to_string());
        }
        if let Some(volume) = self.volume {
            args.push("-a".to_string());
            args.push(Self::volume_to_espeak_amplitude(volume).to_string());
        }
        if let Some(path) = output {
            args.push("-w".to_string());
            args.push(path.to_string_lossy().into_owned());
        }

        args
    }

    /// Run espeak-ng with `text` on stdin and wait for it to finish
    fn run(&self, text: &str, output: Option<&Path>) -> Result<()> {
        let mut child = Command::new(&self.espeak_path)
            .args(self.synthesis_args(output))
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                error!("Failed to spawn espeak-ng: {}", e);
                StasyanError::Speech(format!("Failed to start espeak-ng: {}", e))
            })?;

        // Dropping stdin closes the pipe so espeak-ng sees end of input.
        // A write error is held until the process has been reaped: when
        // espeak-ng quits early its exit status and stderr explain why.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let result = child.wait_with_output()?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(StasyanError::Speech(format!(
                "espeak-ng exited with {}: {}",
                result.status,
                stderr.trim()
            )));
        }

        written.map_err(|e| {
            error!("espeak-ng stopped reading input: {}", e);
            StasyanError::Io(e)
        })
    }
}

impl SpeechEngine for EspeakEngine {
    fn backend_name(&self) -> &'static str {
        "espeak-ng"
    }

    fn voices(&mut self) -> Result<Vec<Voice>> {
        let output = Command::new(&self.espeak_path)
            .arg("--voices")
            .output()
            .map_err(|e| StasyanError::Speech(format!("Failed to list voices: {}", e)))?;

        if !output.status.success() {
            warn!("espeak-ng --voices exited with {}", output.status);
        }

        let voices = parse_voice_list(&String::from_utf8_lossy(&output.stdout));
        debug!("espeak-ng reported {} voices", voices.len());
        Ok(voices)
    }

    fn set_voice(&mut self, voice: &Voice) -> Result<()> {
        debug!("Setting voice to {} ({})", voice.name, voice.id);
        self.voice = Some(voice.id.clone());
        Ok(())
    }

    fn set_rate(&mut self, rate: u8) -> Result<()> {
        debug!("Setting rate to {}", rate);
        self.rate = Some(rate);
        Ok(())
    }

    fn set_volume(&mut self, volume: u8) -> Result<()> {
        debug!("Setting volume to {}", volume);
        self.volume = Some(volume);
        Ok(())
    }

    fn speak_and_wait(&mut self, text: &str) -> Result<()> {
        debug!("Speaking {} chars", text.len());
        self.run(text, None)
    }

    fn save_to_file(&mut self, text: &str, path: &Path) -> Result<()> {
        debug!("Writing {} chars of speech to {:?}", text.len(), path);
        self.run(text, Some(path))
    }
}
