//! Speech engine backends

// espeak-ng subprocess backend (playback and file export)
pub mod espeak;

// Platform TTS through the tts crate (playback only)
pub mod native;
