//! Single-line text buffer for the prompt and the contact form fields.
//!
//! Supports the readline subset the prompt needs: cursor movement,
//! character and word deletion, and kill-to-start/end.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Cursor movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Forward,
    Back,
    Head,
    End,
}

/// Single-line text with a cursor measured in chars.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Replaces the text and moves the cursor to the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = single_line(text);
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Removes and returns the text.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    /// Inserts a string at the cursor, advancing the cursor.
    ///
    /// Newlines and tabs become spaces.
    pub fn insert_str(&mut self, text: &str) {
        let text = single_line(text);
        if text.is_empty() {
            return;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert_str(byte_idx, &text);
        self.cursor += text.chars().count();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Deletes the character before the cursor (Backspace semantics).
    pub fn delete_prev_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.remove_range(self.cursor, self.cursor + 1);
        true
    }

    /// Deletes the character at the cursor (Delete key semantics).
    pub fn delete_next_char(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        self.remove_range(self.cursor, self.cursor + 1);
        true
    }

    /// Deletes from the cursor to the end of the line.
    pub fn delete_to_end(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.truncate(byte_idx);
        true
    }

    /// Deletes from the start of the line to the cursor.
    pub fn delete_to_head(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.remove_range(0, self.cursor);
        self.cursor = 0;
        true
    }

    /// Deletes the word immediately to the left of the cursor.
    pub fn delete_word_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let chars: Vec<char> = self.text.chars().collect();
        let mut start = self.cursor.min(chars.len());
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        self.remove_range(start, self.cursor);
        self.cursor = start;
        true
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        let len = self.char_len();
        self.cursor = match movement {
            CursorMove::Forward => (self.cursor + 1).min(len),
            CursorMove::Back => self.cursor.saturating_sub(1),
            CursorMove::Head => 0,
            CursorMove::End => len,
        };
    }

    /// Handles a key for basic editing.
    ///
    /// Returns true when the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if matches!(key.kind, KeyEventKind::Release) {
            return false;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(ch);
                true
            }
            KeyCode::Char('a') if ctrl => {
                self.move_cursor(CursorMove::Head);
                false
            }
            KeyCode::Char('e') if ctrl => {
                self.move_cursor(CursorMove::End);
                false
            }
            KeyCode::Char('u') if ctrl => self.delete_to_head(),
            KeyCode::Char('k') if ctrl => self.delete_to_end(),
            KeyCode::Char('w') if ctrl => self.delete_word_left(),
            KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) => {
                self.delete_word_left()
            }
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left => {
                self.move_cursor(CursorMove::Back);
                false
            }
            KeyCode::Right => {
                self.move_cursor(CursorMove::Forward);
                false
            }
            KeyCode::Home => {
                self.move_cursor(CursorMove::Head);
                false
            }
            KeyCode::End => {
                self.move_cursor(CursorMove::End);
                false
            }
            _ => false,
        }
    }

    fn remove_range(&mut self, start: usize, end: usize) {
        let start = char_to_byte_index(&self.text, start);
        let end = char_to_byte_index(&self.text, end);
        self.text.replace_range(start..end, "");
    }
}

fn single_line(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r', '\t'], " ")
}

fn char_to_byte_index(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map_or(text.len(), |(idx, _)| idx)
}
