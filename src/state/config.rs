//! Configuration management

use crate::{Result, StasyanError};
use ini::Ini;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// Default voice id applied at startup
pub const DEFAULT_VOICE: &str = "ru";

/// Default folder for saved audio, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "Saves";

/// Application settings
///
/// Read from `~/.stasyan.cfg` when it exists. The file is never written;
/// without it every getter returns its built-in default.
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.stasyan.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from the user's home directory
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from `path`, falling back to defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);

        let ini = if path.is_dir() {
            return Err(StasyanError::Config(format!(
                "{} is a directory, not a config file",
                path.display()
            )));
        } else if path.exists() {
            Ini::load_from_file(path)
                .map_err(|e| StasyanError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, using defaults");
            Ini::new()
        };

        Ok(Self {
            ini,
            path: path.to_path_buf(),
        })
    }

    /// Parse configuration from INI text
    pub fn parse(text: &str) -> Result<Self> {
        let ini = Ini::load_from_str(text)
            .map_err(|e| StasyanError::IniParse(format!("Failed to parse config: {}", e)))?;

        Ok(Self {
            ini,
            path: PathBuf::new(),
        })
    }

    /// Get config file path (~/.stasyan.cfg)
    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".stasyan.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get an integer value from config
    pub fn get_int(&self, section: &str, key: &str, default: i32) -> i32 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in memory (never saved)
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    /// Voice id selected at startup when the engine has it
    pub fn default_voice(&self) -> String {
        self.get_string("speech", "default_voice", DEFAULT_VOICE)
    }

    /// Speech rate (0-100)
    pub fn rate(&self) -> Option<u8> {
        self.get_int("speech", "rate", -1)
            .try_into()
            .ok()
            .filter(|&r| r <= 100)
    }

    /// Speech volume (0-100)
    pub fn volume(&self) -> Option<u8> {
        self.get_int("speech", "volume", -1)
            .try_into()
            .ok()
            .filter(|&v| v <= 100)
    }

    /// Explicit espeak-ng executable, if configured
    pub fn espeak_path(&self) -> Option<String> {
        self.ini
            .get_from(Some("speech"), "espeak_path")
            .filter(|p| !p.is_empty())
            .map(str::to_string)
    }

    /// Folder that saved audio files go into
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(self.get_string("output", "directory", DEFAULT_OUTPUT_DIR))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ini: Ini::new(),
            path: Self::config_path(),
        }
    }
}
