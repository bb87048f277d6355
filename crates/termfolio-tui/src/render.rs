//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui `Frame`, and never
//! mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::common::Palette;
use crate::header::{HEADER_HEIGHT, render_header};
use crate::state::{AppState, Notice};
use crate::transcript::{TRANSCRIPT_MARGIN, render_transcript};

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;
    let palette = Palette::for_theme(state.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)])
        .split(area);

    render_header(frame, chunks[0], palette);
    render_transcript(frame, chunks[1], state);

    if let Some(notice) = &state.notice {
        render_notice(frame, chunks[1], notice, palette);
    }
}

/// Draws the notice on the bottom-right corner of the transcript.
fn render_notice(frame: &mut Frame, area: Rect, notice: &Notice, palette: Palette) {
    let text = format!(" {} ", notice.text);
    let width = u16::try_from(text.width())
        .unwrap_or(u16::MAX)
        .min(area.width.saturating_sub(TRANSCRIPT_MARGIN * 2));
    if width == 0 || area.height == 0 {
        return;
    }

    let rect = Rect {
        x: area.x + area.width.saturating_sub(width + TRANSCRIPT_MARGIN),
        y: area.y + area.height - 1,
        width,
        height: 1,
    };
    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(Line::styled(text, palette.inverted())),
        rect,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use termfolio_core::config::Config;
    use termfolio_core::portfolio::Portfolio;

    use super::*;
    use crate::events::UiEvent;
    use crate::update;

    fn screen(app: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_boot_screen_shows_banner_and_header() {
        let mut app = AppState::new(&Config::default(), Portfolio::builtin().unwrap());
        update::start(&mut app);
        for _ in 0..3 {
            update::update(&mut app, UiEvent::BootTick);
        }
        let screen = screen(&app, 120, 20);
        assert!(screen.contains("TERRY.DEV/PORTFOLIO"));
        assert!(screen.contains("[PERSONNEL FILE]"));
        assert!(screen.contains("COPYRIGHT 2021 TERRY SYSTEMS"));
        assert!(!screen.contains("INITIALIZING"));
    }

    #[test]
    fn test_shell_screen_shows_prompt_and_notice() {
        let mut config = Config::default();
        config.skip_boot = true;
        let mut app = AppState::new(&config, Portfolio::builtin().unwrap());
        update::start(&mut app);
        app.tui.lines.flush();
        update::update(&mut app, UiEvent::ClipboardCopied);

        let screen = screen(&app, 100, 30);
        assert!(screen.contains("SYSTEM READY"));
        assert!(screen.contains("COPIED TO CLIPBOARD"));
        assert!(screen.lines().any(|row| row.starts_with(" > ")));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = AppState::new(&Config::default(), Portfolio::builtin().unwrap());
        screen(&app, 3, 1);
        screen(&app, 1, 3);
    }
}
