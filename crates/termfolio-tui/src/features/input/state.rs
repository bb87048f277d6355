//! Prompt input state.
//!
//! Manages the prompt buffer, command history, history navigation and the
//! tab-completion suggestion.

use termfolio_core::commands;

use super::line_buffer::LineBuffer;

/// Prompt state: buffer, history and completion.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub buffer: LineBuffer,

    /// Submitted commands, oldest first.
    pub history: Vec<String>,

    /// Current position in history (None = not navigating).
    pub history_index: Option<usize>,

    /// Completion offered for the current buffer.
    pub suggestion: Option<&'static str>,
}

impl InputState {
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// Recomputes the suggestion. Call after every buffer change.
    pub fn refresh_suggestion(&mut self) {
        self.suggestion = commands::suggest(self.buffer.text());
    }

    /// Replaces the buffer with the suggestion, if there is one.
    pub fn accept_suggestion(&mut self) -> bool {
        let Some(suggestion) = self.suggestion.take() else {
            return false;
        };
        self.buffer.set_text(suggestion);
        true
    }

    /// Clears the buffer and returns what was typed.
    pub fn take_submission(&mut self) -> String {
        self.suggestion = None;
        self.buffer.take()
    }

    /// Appends a submitted command to the history.
    pub fn record(&mut self, command: &str) {
        self.history.push(command.to_string());
        self.reset_navigation();
    }

    /// Resets history navigation state.
    pub fn reset_navigation(&mut self) {
        self.history_index = None;
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.suggestion = None;
        self.reset_navigation();
    }

    /// Navigates to an older history entry.
    pub fn navigate_up(&mut self) {
        if self.history.is_empty() {
            return;
        }

        let index = match self.history_index {
            None => self.history.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.history_index = Some(index);

        if let Some(entry) = self.history.get(index) {
            self.buffer.set_text(entry);
        }
        self.refresh_suggestion();
    }

    /// Navigates to a newer history entry; past the newest clears the buffer.
    pub fn navigate_down(&mut self) {
        let Some(idx) = self.history_index else {
            return;
        };

        if idx + 1 < self.history.len() {
            self.history_index = Some(idx + 1);
            if let Some(entry) = self.history.get(idx + 1) {
                self.buffer.set_text(entry);
            }
        } else {
            self.history_index = None;
            self.buffer.clear();
        }
        self.refresh_suggestion();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_history(entries: &[&str]) -> InputState {
        let mut input = InputState::default();
        for entry in entries {
            input.record(entry);
        }
        input
    }

    #[test]
    fn test_history_recall_round_trip() {
        let mut input = with_history(&["personnel", "skills"]);

        input.navigate_up();
        assert_eq!(input.text(), "skills");
        input.navigate_up();
        assert_eq!(input.text(), "personnel");
        input.navigate_down();
        assert_eq!(input.text(), "skills");
        input.navigate_down();
        assert_eq!(input.text(), "");
        assert_eq!(input.history_index, None);
        assert_eq!(input.buffer.cursor(), 0);
    }

    #[test]
    fn test_up_stops_at_oldest() {
        let mut input = with_history(&["one", "two"]);
        for _ in 0..5 {
            input.navigate_up();
        }
        assert_eq!(input.text(), "one");
        assert_eq!(input.history_index, Some(0));
    }

    #[test]
    fn test_recall_never_mutates_history() {
        let mut input = with_history(&["help", "comms"]);
        input.navigate_up();
        input.buffer.insert_str(" extra");
        input.navigate_up();
        input.navigate_down();
        assert_eq!(input.history, vec!["help", "comms"]);
    }

    #[test]
    fn test_down_without_navigation_is_noop() {
        let mut input = with_history(&["help"]);
        input.buffer.set_text("draft");
        input.navigate_down();
        assert_eq!(input.text(), "draft");
    }

    #[test]
    fn test_accept_suggestion() {
        let mut input = InputState::default();
        input.buffer.set_text("pro");
        input.refresh_suggestion();
        assert_eq!(input.suggestion, Some("projects"));

        assert!(input.accept_suggestion());
        assert_eq!(input.text(), "projects");
        assert_eq!(input.suggestion, None);
        assert!(!input.accept_suggestion());
    }
}
