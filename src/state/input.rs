//! Single-line text input with a character cursor (pure state transitions).
//!
//! The cursor counts characters, not bytes, so editing works for any UTF-8
//! text. Every editing method reports whether the text changed; only text
//! changes feed the autocomplete engine.

use unicode_width::UnicodeWidthStr;

/// The search box contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    /// Cursor position in characters, `0..=char_count`.
    cursor: usize,
}

impl InputLine {
    /// Create an input holding `text` with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let mut line = Self::default();
        line.set_text(text);
        line
    }

    /// Current text, untrimmed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor, accounting for wide characters.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.byte_offset(self.cursor)].width()
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    /// Insert a character at the cursor and advance past it.
    pub fn insert_char(&mut self, ch: char) -> bool {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    /// Move the cursor one character left. Saturates at 0.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one character right. Saturates at the end.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Move the cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Remove all text.
    pub fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        self.cursor = 0;
        true
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
