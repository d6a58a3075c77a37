//! Text buffer behind the main edit area

use log::debug;

/// Editable text that Listen and Save read from
///
/// The window edits it in place through [`TextBuffer::as_mut_string`];
/// loading a file swaps the whole content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    buffer: String,
}

impl TextBuffer {
    /// Create a new empty text buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current buffer contents
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    /// Replace the whole content, returning what was there before
    pub fn replace(&mut self, text: String) -> String {
        debug!(
            "Replacing text buffer: {} chars -> {} chars",
            self.buffer.len(),
            text.len()
        );
        std::mem::replace(&mut self.buffer, text)
    }

    /// Mutable access for the text edit widget
    pub fn as_mut_string(&mut self) -> &mut String {
        &mut self.buffer
    }

    /// True when there is nothing at all to speak
    ///
    /// Whitespace counts as text.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Get buffer length in bytes
    pub fn len(&self) -> usize {
        self.buffer.len()
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        Self {
            buffer: text.to_string(),
        }
    }
}
