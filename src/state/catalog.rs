//! Voice catalog shown in the voice list

use crate::speech::{SpeechEngine, Voice};
use log::{info, warn};

/// Voices the engine offered at startup, in engine order
#[derive(Debug, Clone, Default)]
pub struct VoiceCatalog {
    voices: Vec<Voice>,
}

impl VoiceCatalog {
    /// Ask the engine for its voices
    ///
    /// A failing engine yields an empty catalog rather than an error, so
    /// the window can still open.
    pub fn enumerate(engine: &mut dyn SpeechEngine) -> Self {
        match engine.voices() {
            Ok(voices) => {
                info!(
                    "{} backend offers {} voices",
                    engine.backend_name(),
                    voices.len()
                );
                Self { voices }
            }
            Err(e) => {
                warn!("Could not list voices: {}", e);
                Self::default()
            }
        }
    }

    /// First voice whose display name is `name`
    pub fn find_by_name(&self, name: &str) -> Option<&Voice> {
        self.voices.iter().find(|voice| voice.name == name)
    }

    /// First voice whose engine id is `id`
    pub fn find_by_id(&self, id: &str) -> Option<&Voice> {
        self.voices.iter().find(|voice| voice.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Voice> {
        self.voices.iter()
    }

    /// Display names in list order
    pub fn names(&self) -> Vec<&str> {
        self.voices.iter().map(|voice| voice.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

impl From<Vec<Voice>> for VoiceCatalog {
    fn from(voices: Vec<Voice>) -> Self {
        Self { voices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> VoiceCatalog {
        VoiceCatalog::from(vec![
            Voice::new("ru", "Russian"),
            Voice::new("en-gb", "English"),
            Voice::new("en-us", "English"),
        ])
    }

    #[test]
    fn test_find_by_name_first_match() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_name("English").unwrap().id, "en-gb");
        assert!(catalog.find_by_name("Klingon").is_none());
    }

    #[test]
    fn test_find_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_id("en-us").unwrap().name, "English");
        assert!(catalog.find_by_id("de").is_none());
    }

    #[test]
    fn test_names_keep_order() {
        assert_eq!(catalog().names(), vec!["Russian", "English", "English"]);
    }
}
