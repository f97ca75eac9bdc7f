//! The text typed since the last mode change.

/// Characters accumulated while a non-idle mode is active.
///
/// Only three mutations exist: replace everything, append one character,
/// clear. Backspace is expressed as a replace with the last character gone.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn append(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Replace the buffer with itself minus its last character.
    /// Returns false when there was nothing to remove.
    pub fn remove_last(&mut self) -> bool {
        let mut chars = self.text.chars();
        if chars.next_back().is_none() {
            return false;
        }
        let shortened = chars.as_str().to_string();
        self.set(shortened);
        true
    }
}
