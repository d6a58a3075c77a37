//! Application state management
//!
//! [`AppContext`] owns everything the handlers touch: the speech engine,
//! the voice catalog, the text buffer and the dialogs. It is created once
//! at startup and passed explicitly to every handler.

pub mod catalog;
pub mod config;

use crate::notify::{DialogNotifier, Notifier};
use crate::picker::{DialogFilePicker, FilePicker};
use crate::speech::{SpeechEngine, TextBuffer, Voice};
use crate::Result;
use catalog::VoiceCatalog;
use config::Config;
use log::{debug, info};

/// Main application state
pub struct AppContext {
    /// Configuration loaded from ~/.stasyan.cfg
    pub config: Config,

    /// The single speech engine instance
    pub engine: Box<dyn SpeechEngine>,

    /// Voices enumerated at startup
    pub catalog: VoiceCatalog,

    /// Voice last applied to the engine, if any
    pub active_voice: Option<Voice>,

    /// Content of the main text area
    pub text: TextBuffer,

    /// Modal dialogs
    pub notifier: Box<dyn Notifier>,

    /// "Open file" dialog
    pub picker: Box<dyn FilePicker>,
}

impl AppContext {
    /// Create the context with the best available engine and native dialogs
    pub fn new(config: Config) -> Result<Self> {
        let engine = crate::speech::create_engine(&config)?;
        info!("Speech engine created ({})", engine.backend_name());

        Self::with_parts(
            config,
            engine,
            Box::new(DialogNotifier),
            Box::new(DialogFilePicker::default()),
        )
    }

    /// Create the context from explicit parts
    ///
    /// Applies configured rate and volume, enumerates voices and selects
    /// the configured default voice without showing a dialog.
    pub fn with_parts(
        config: Config,
        mut engine: Box<dyn SpeechEngine>,
        notifier: Box<dyn Notifier>,
        picker: Box<dyn FilePicker>,
    ) -> Result<Self> {
        if let Some(rate) = config.rate() {
            engine.set_rate(rate)?;
            info!("Speech rate set to {}", rate);
        }
        if let Some(volume) = config.volume() {
            engine.set_volume(volume)?;
            info!("Speech volume set to {}", volume);
        }

        let catalog = VoiceCatalog::enumerate(engine.as_mut());

        let default_id = config.default_voice();
        let active_voice = match catalog.find_by_id(&default_id) {
            Some(voice) => {
                engine.set_voice(voice)?;
                info!("Default voice set to {} ({})", voice.name, voice.id);
                Some(voice.clone())
            }
            None => {
                debug!("Default voice '{}' not offered, keeping engine default", default_id);
                None
            }
        };

        Ok(Self {
            config,
            engine,
            catalog,
            active_voice,
            text: TextBuffer::new(),
            notifier,
            picker,
        })
    }
}
