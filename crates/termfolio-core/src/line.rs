//! Output lines produced by the command resolver.
//!
//! An `OutputLine` is immutable once built. The typewriter engine only ever
//! reads `text` and `kind`; how much of the text is visible is tracked
//! separately by the renderer-side state.

use serde::Serialize;

/// How a line reacts when it is activated (clicked).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineKind {
    /// Plain text, no activation.
    Plain,
    /// Opens `url`, or copies `copyable` to the clipboard when it is set.
    Link {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        copyable: Option<String>,
    },
    /// Re-submits `command_text` as if the user typed it.
    Command { command_text: String },
    /// Marker for the embedded contact form.
    ContactForm,
}

/// One logical unit of terminal output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputLine {
    pub text: String,
    #[serde(flatten)]
    pub kind: LineKind,
}

impl OutputLine {
    /// A plain line.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Plain,
        }
    }

    /// A blank line.
    pub fn blank() -> Self {
        Self::plain("")
    }

    /// A line that opens `url` when activated.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Link {
                url: url.into(),
                copyable: None,
            },
        }
    }

    /// A link line whose activation copies `copyable` instead of navigating.
    pub fn copy_link(
        text: impl Into<String>,
        url: impl Into<String>,
        copyable: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Link {
                url: url.into(),
                copyable: Some(copyable.into()),
            },
        }
    }

    /// A line that runs `command_text` when activated.
    pub fn command(text: impl Into<String>, command_text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: LineKind::Command {
                command_text: command_text.into(),
            },
        }
    }

    /// The contact form marker. Its text is empty so it never animates.
    pub fn contact_form() -> Self {
        Self {
            text: String::new(),
            kind: LineKind::ContactForm,
        }
    }

    /// Echo of the user's input, the first line of every command batch.
    pub fn echo(raw: &str) -> Self {
        Self::plain(format!("> {raw}"))
    }

    /// Number of characters (not bytes) in the text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_activatable(&self) -> bool {
        matches!(self.kind, LineKind::Link { .. } | LineKind::Command { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_chars_not_bytes() {
        let line = OutputLine::plain("══");
        assert_eq!(line.char_len(), 2);
        assert!(line.text.len() > 2);
    }

    #[test]
    fn test_contact_form_marker_is_blank() {
        let line = OutputLine::contact_form();
        assert!(line.is_blank());
        assert!(!line.is_activatable());
    }

    #[test]
    fn test_echo_prefixes_prompt() {
        assert_eq!(OutputLine::echo("skills").text, "> skills");
    }
}
