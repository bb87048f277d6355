//! Prompt key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::InputState;

/// What a key did to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Key not meant for the prompt.
    Ignored,
    /// Buffer text or cursor changed. `typed` is the inserted character.
    Edited { typed: Option<char> },
    /// Enter was pressed; carries the raw buffer, which is now empty.
    Submitted(String),
}

/// Handles a key while the prompt has focus.
pub fn handle_key(input: &mut InputState, key: KeyEvent) -> InputOutcome {
    if matches!(key.kind, KeyEventKind::Release) {
        return InputOutcome::Ignored;
    }

    match key.code {
        KeyCode::Enter => InputOutcome::Submitted(input.take_submission()),
        KeyCode::Tab => {
            // Never inserts a tab character.
            if input.accept_suggestion() {
                InputOutcome::Edited { typed: None }
            } else {
                InputOutcome::Ignored
            }
        }
        KeyCode::Up => {
            input.navigate_up();
            InputOutcome::Edited { typed: None }
        }
        KeyCode::Down => {
            input.navigate_down();
            InputOutcome::Edited { typed: None }
        }
        _ => {
            let typed = match key.code {
                KeyCode::Char(ch)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(ch)
                }
                _ => None,
            };
            let before = (input.text().len(), input.buffer.cursor());
            let changed = input.buffer.input(key);
            if changed {
                input.refresh_suggestion();
            }
            if changed || before != (input.text().len(), input.buffer.cursor()) {
                InputOutcome::Edited { typed }
            } else {
                InputOutcome::Ignored
            }
        }
    }
}

/// Inserts pasted text at the cursor.
pub fn handle_paste(input: &mut InputState, text: &str) {
    input.buffer.insert_str(text);
    input.refresh_suggestion();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut InputState, text: &str) {
        for ch in text.chars() {
            handle_key(input, key(KeyCode::Char(ch)));
        }
    }

    #[test]
    fn test_typing_updates_suggestion() {
        let mut input = InputState::default();
        type_str(&mut input, "pro");
        assert_eq!(input.suggestion, Some("projects"));
        type_str(&mut input, "x");
        assert_eq!(input.suggestion, None);
    }

    #[test]
    fn test_tab_completes() {
        let mut input = InputState::default();
        type_str(&mut input, "pro");
        assert_eq!(
            handle_key(&mut input, key(KeyCode::Tab)),
            InputOutcome::Edited { typed: None }
        );
        assert_eq!(input.text(), "projects");
        assert_eq!(input.suggestion, None);
    }

    #[test]
    fn test_tab_without_suggestion_is_noop() {
        let mut input = InputState::default();
        type_str(&mut input, "zz");
        assert_eq!(
            handle_key(&mut input, key(KeyCode::Tab)),
            InputOutcome::Ignored
        );
        assert_eq!(input.text(), "zz");
    }

    #[test]
    fn test_enter_returns_raw_and_clears() {
        let mut input = InputState::default();
        type_str(&mut input, " help ");
        assert_eq!(
            handle_key(&mut input, key(KeyCode::Enter)),
            InputOutcome::Submitted(" help ".to_string())
        );
        assert!(input.text().is_empty());
    }

    #[test]
    fn test_typed_char_is_reported() {
        let mut input = InputState::default();
        assert_eq!(
            handle_key(&mut input, key(KeyCode::Char('h'))),
            InputOutcome::Edited { typed: Some('h') }
        );
    }

    #[test]
    fn test_paste_refreshes_suggestion() {
        let mut input = InputState::default();
        handle_paste(&mut input, "ski");
        assert_eq!(input.suggestion, Some("skills"));
    }
}
