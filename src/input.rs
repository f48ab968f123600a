//! Input handling module
//!
//! Single-line text field backing the search box. Editing keys are consumed
//! here; everything else is reported back as ignored so the app can map it to
//! an action.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press did to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// The text changed
    Changed,
    /// Only the cursor moved
    Moved,
    /// Not an editing key
    Ignored,
}

/// Editable single-line text with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Cursor position in chars, `0..=value.chars().count()`
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the whole text and put the cursor at the end.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> InputResult {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return InputResult::Ignored;
        }

        match key.code {
            KeyCode::Char(c) => {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                InputResult::Changed
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return InputResult::Ignored;
                }
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                InputResult::Changed
            }
            KeyCode::Delete => {
                if self.cursor >= self.char_len() {
                    return InputResult::Ignored;
                }
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                InputResult::Changed
            }
            KeyCode::Left if self.cursor > 0 => {
                self.cursor -= 1;
                InputResult::Moved
            }
            KeyCode::Right if self.cursor < self.char_len() => {
                self.cursor += 1;
                InputResult::Moved
            }
            KeyCode::Home => {
                self.cursor = 0;
                InputResult::Moved
            }
            KeyCode::End => {
                self.cursor = self.char_len();
                InputResult::Moved
            }
            _ => InputResult::Ignored,
        }
    }
}
