//! Error types for Stasyan

use std::io;
use thiserror::Error;

/// Main error type for Stasyan
#[derive(Error, Debug)]
pub enum StasyanError {
    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Stasyan operations
pub type Result<T> = std::result::Result<T, StasyanError>;

impl From<String> for StasyanError {
    fn from(s: String) -> Self {
        StasyanError::Other(s)
    }
}

impl From<&str> for StasyanError {
    fn from(s: &str) -> Self {
        StasyanError::Other(s.to_string())
    }
}
