//! Transcript rendering.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::layout::{TRANSCRIPT_MARGIN, build_rows};
use crate::state::TuiState;

/// Draws the visible slice of the transcript into `area`.
pub fn render_transcript(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let rows = build_rows(tui, area.width);
    let viewport = usize::from(area.height);
    let offset = tui.scroll.offset_in(rows.len(), viewport);

    let visible: Vec<Line<'static>> = rows
        .into_iter()
        .skip(offset)
        .take(viewport)
        .map(|row| row.line)
        .collect();

    let inner = Rect {
        x: area.x + TRANSCRIPT_MARGIN,
        width: area.width.saturating_sub(TRANSCRIPT_MARGIN * 2),
        ..area
    };
    frame.render_widget(Paragraph::new(visible), inner);
}
