//! Prompt rendering.

use ratatui::text::{Line, Span};

use super::line_buffer::LineBuffer;
use super::state::InputState;
use crate::common::Palette;

pub const PROMPT_PREFIX: &str = "> ";

/// Builds the prompt row: prefix, buffer, block cursor and ghost completion.
///
/// Text wider than `width` scrolls horizontally so the cursor stays visible.
pub fn prompt_line(
    input: &InputState,
    palette: Palette,
    cursor_visible: bool,
    width: usize,
) -> Line<'static> {
    let mut spans = vec![Span::styled(PROMPT_PREFIX, palette.text())];
    spans.extend(field_spans(
        &input.buffer,
        palette,
        cursor_visible,
        width.saturating_sub(PROMPT_PREFIX.len()),
    ));

    if let Some(suggestion) = input.suggestion {
        let typed = input.text().trim_start().chars().count();
        let ghost: String = suggestion.chars().skip(typed).collect();
        if !ghost.is_empty() {
            spans.push(Span::styled(ghost, palette.dim()));
        }
    }
    Line::from(spans)
}

/// Spans for an editable single-line buffer with a block cursor.
pub fn field_spans(
    buffer: &LineBuffer,
    palette: Palette,
    cursor_visible: bool,
    width: usize,
) -> Vec<Span<'static>> {
    let chars: Vec<char> = buffer.text().chars().collect();
    let cursor = buffer.cursor().min(chars.len());
    // Keep one column for the cursor itself.
    let start = (cursor + 1).saturating_sub(width.max(1));

    let before: String = chars[start..cursor].iter().collect();
    let under = chars.get(cursor).copied();
    let after: String = chars
        .get(cursor + 1..)
        .map_or_else(String::new, |rest| rest.iter().collect());

    let cursor_text = under.map_or_else(|| " ".to_string(), |ch| ch.to_string());
    let cursor_style = if cursor_visible {
        palette.inverted()
    } else {
        palette.text()
    };

    let mut spans = Vec::with_capacity(3);
    if !before.is_empty() {
        spans.push(Span::styled(before, palette.text()));
    }
    spans.push(Span::styled(cursor_text, cursor_style));
    if !after.is_empty() {
        spans.push(Span::styled(after, palette.text()));
    }
    spans
}
