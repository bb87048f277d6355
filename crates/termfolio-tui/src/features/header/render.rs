use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::{BRAND, TITLE, layout};
use crate::common::Palette;

fn pad_to(spans: &mut Vec<Span<'static>>, column: &mut usize, x: usize) {
    if x > *column {
        spans.push(Span::raw(" ".repeat(x - *column)));
        *column = x;
    }
}

/// Draws the title bar and navigation.
pub fn render_header(frame: &mut Frame, area: Rect, palette: Palette) {
    let layout = layout(area.width);

    let mut spans = vec![Span::styled(TITLE, palette.bold())];
    let mut column = TITLE.width();

    if layout.show_brand {
        pad_to(&mut spans, &mut column, usize::from(layout.brand_x));
        spans.push(Span::styled(BRAND, palette.bold()));
        column += BRAND.width();
    }

    for slot in &layout.slots {
        pad_to(&mut spans, &mut column, usize::from(slot.x));
        spans.push(Span::styled(slot.label, palette.text()));
        column += usize::from(slot.width);
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(palette.dim()),
    );
    frame.render_widget(header, area);
}
