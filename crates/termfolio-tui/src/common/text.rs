//! Text utilities for TUI rendering.
//!
//! Shared text processing functions used across rendering and hit-testing.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Splits `text` into rows of at most `width` terminal columns.
///
/// Breaks anywhere, not only at spaces, so a row never overflows even for
/// long URLs. An empty string yields one empty row.
pub fn wrap_columns(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }
    rows.push(current);
    rows
}

/// Truncates a string with ellipsis if it exceeds max_width (unicode-aware).
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
        used += ch_width;
    }
    truncated.push('…');
    truncated
}
