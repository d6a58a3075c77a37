//! Speech synthesis system

pub mod backends;
pub mod buffer;
pub mod engine;

pub use buffer::TextBuffer;
pub use engine::{create_engine, SpeechEngine, Voice};
