//! Row layout shared by the renderer and mouse hit-testing.
//!
//! Output lines are wrapped to the content width here, once, so that a click
//! at screen row `y` maps to exactly the line drawn there.

use ratatui::text::{Line, Span};
use termfolio_core::line::LineKind;

use crate::boot::BOOT_PROMPT;
use crate::common::{Palette, wrap_columns};
use crate::contact::{CLOSED_FORM, ContactField, form_rows};
use crate::header::HEADER_HEIGHT;
use crate::input::prompt_line;
use crate::state::{Focus, Phase, TuiState};

/// Blank columns on each side of the transcript.
pub const TRANSCRIPT_MARGIN: u16 = 1;

/// What a transcript row reacts to when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    Inert,
    /// A row of the output line at this index.
    Line(usize),
    /// A row of the live contact form.
    Field(ContactField),
    Prompt,
}

pub struct Row {
    pub line: Line<'static>,
    pub target: RowTarget,
}

impl Row {
    fn inert(line: Line<'static>) -> Self {
        Self {
            line,
            target: RowTarget::Inert,
        }
    }
}

/// Usable text width for a terminal of `width` columns.
pub fn content_width(width: u16) -> usize {
    usize::from(width.saturating_sub(TRANSCRIPT_MARGIN * 2)).max(1)
}

/// Transcript rows for a terminal of `width` columns.
pub fn build_rows(tui: &TuiState, width: u16) -> Vec<Row> {
    let palette = Palette::for_theme(tui.theme);
    let width = content_width(width);
    match tui.phase {
        Phase::Boot => boot_rows(tui, palette),
        Phase::Shell => shell_rows(tui, palette, width),
    }
}

fn boot_rows(tui: &TuiState, palette: Palette) -> Vec<Row> {
    let mut rows: Vec<Row> = tui
        .boot
        .visible_lines()
        .iter()
        .map(|line| Row::inert(Line::styled(*line, palette.text())))
        .collect();

    if tui.boot.prompt_visible {
        let cursor = if tui.cursor_visible() {
            palette.inverted()
        } else {
            palette.text()
        };
        rows.push(Row::inert(Line::from(vec![
            Span::styled(BOOT_PROMPT, palette.bold()),
            Span::raw(" "),
            Span::styled(" ", cursor),
        ])));
    }
    rows
}

/// Index of the form marker that draws the live form.
///
/// Only the newest marker is live, and only once it has been revealed; while
/// a newer marker is still pending every rendered marker shows as closed.
pub fn live_form_index(tui: &TuiState) -> Option<usize> {
    if tui
        .lines
        .pending()
        .any(|line| line.kind == LineKind::ContactForm)
    {
        return None;
    }
    tui.lines
        .lines()
        .iter()
        .rposition(|line| line.line.kind == LineKind::ContactForm)
}

fn shell_rows(tui: &TuiState, palette: Palette, width: usize) -> Vec<Row> {
    let lines = tui.lines.lines();
    let live_form = live_form_index(tui);
    let cursor_visible = tui.cursor_visible();
    let mut rows = Vec::with_capacity(lines.len() + 1);

    for (index, rendered) in lines.iter().enumerate() {
        let style = match rendered.line.kind {
            LineKind::Plain => palette.text(),
            LineKind::Link { .. } | LineKind::Command { .. } => palette.link(),
            LineKind::ContactForm => {
                if live_form == Some(index) {
                    let focused = tui.focus == Focus::Contact;
                    rows.extend(
                        form_rows(&tui.contact, palette, focused, cursor_visible, width)
                            .into_iter()
                            .map(|row| Row {
                                line: row.line,
                                target: row.field.map_or(RowTarget::Inert, RowTarget::Field),
                            }),
                    );
                } else {
                    rows.push(Row::inert(Line::styled(CLOSED_FORM, palette.dim())));
                }
                continue;
            }
        };
        let target = if rendered.line.is_activatable() {
            RowTarget::Line(index)
        } else {
            RowTarget::Inert
        };
        for chunk in wrap_columns(rendered.visible_text(), width) {
            rows.push(Row {
                line: Line::styled(chunk, style),
                target,
            });
        }
    }

    let prompt_cursor = cursor_visible && tui.focus == Focus::Prompt;
    rows.push(Row {
        line: prompt_line(&tui.input, palette, prompt_cursor, width),
        target: RowTarget::Prompt,
    });
    rows
}

/// Rows of the transcript viewport for a terminal of `height` rows.
pub fn viewport_height(height: u16) -> usize {
    usize::from(height.saturating_sub(HEADER_HEIGHT))
}

/// Maps a click at screen cell (`column`, `row`) to a transcript target.
pub fn hit_test(tui: &TuiState, column: u16, row: u16) -> Option<RowTarget> {
    let (width, height) = tui.terminal_size;
    if row < HEADER_HEIGHT
        || column < TRANSCRIPT_MARGIN
        || column >= width.saturating_sub(TRANSCRIPT_MARGIN)
    {
        return None;
    }
    let rows = build_rows(tui, width);
    let offset = tui.scroll.offset_in(rows.len(), viewport_height(height));
    let index = offset + usize::from(row - HEADER_HEIGHT);
    rows.get(index).map(|row| row.target)
}
