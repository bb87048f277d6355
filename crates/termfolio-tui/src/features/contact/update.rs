//! Contact form key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::state::{ContactField, ContactFormState, ContactStatus};

/// What a key did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    Ignored,
    /// Field text or focus changed. `typed` is the inserted character.
    Edited { typed: Option<char> },
    /// Focus should return to the prompt.
    Leave,
    /// The form validated; open this `mailto:` URL.
    Send { url: String },
}

/// Handles a key while the form has focus.
pub fn handle_key(form: &mut ContactFormState, key: KeyEvent, recipient: &str) -> ContactOutcome {
    if matches!(key.kind, KeyEventKind::Release) {
        return ContactOutcome::Ignored;
    }
    if key.code == KeyCode::Esc {
        return ContactOutcome::Leave;
    }
    if form.is_sending() {
        return ContactOutcome::Ignored;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            form.field = form.field.next();
            ContactOutcome::Edited { typed: None }
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.field = form.field.prev();
            ContactOutcome::Edited { typed: None }
        }
        KeyCode::Enter if form.field == ContactField::Send => submit(form, recipient),
        KeyCode::Enter => {
            form.field = form.field.next();
            ContactOutcome::Edited { typed: None }
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
            let Some(buffer) = form.buffer_mut(form.field) else {
                return ContactOutcome::Ignored;
            };
            if buffer.input(key) {
                form.status = ContactStatus::Editing;
                ContactOutcome::Edited { typed }
            } else {
                ContactOutcome::Edited { typed: None }
            }
        }
    }
}

/// Validates the form and builds the mail link.
pub fn submit(form: &mut ContactFormState, recipient: &str) -> ContactOutcome {
    match form.message().mailto(recipient) {
        Ok(url) => {
            form.start_send();
            ContactOutcome::Send { url }
        }
        Err(err) => {
            tracing::debug!(%err, "contact form rejected");
            form.status = ContactStatus::Invalid(err);
            ContactOutcome::Edited { typed: None }
        }
    }
}

pub fn handle_paste(form: &mut ContactFormState, text: &str) {
    if form.is_sending() {
        return;
    }
    if let Some(buffer) = form.buffer_mut(form.field) {
        buffer.insert_str(text);
    }
}
