//! Theme colors.

use ratatui::style::{Color, Modifier, Style};
use termfolio_core::theme::Theme;

/// Colors used by every render path for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Normal text.
    pub fg: Color,
    /// Secondary text: ghost completion, borders, hints.
    pub dim: Color,
    /// Highlights: header brand, focused fields.
    pub bright: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Green => Self {
                fg: Color::Rgb(51, 255, 102),
                dim: Color::Rgb(26, 128, 51),
                bright: Color::Rgb(170, 255, 190),
            },
            Theme::Amber => Self {
                fg: Color::Rgb(255, 176, 0),
                dim: Color::Rgb(128, 88, 0),
                bright: Color::Rgb(255, 214, 128),
            },
            Theme::Blue => Self {
                fg: Color::Rgb(80, 160, 255),
                dim: Color::Rgb(40, 80, 128),
                bright: Color::Rgb(170, 210, 255),
            },
            Theme::Purple => Self {
                fg: Color::Rgb(190, 120, 255),
                dim: Color::Rgb(95, 60, 128),
                bright: Color::Rgb(225, 190, 255),
            },
            Theme::Cyan => Self {
                fg: Color::Rgb(0, 230, 230),
                dim: Color::Rgb(0, 115, 115),
                bright: Color::Rgb(150, 255, 255),
            },
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn bold(&self) -> Style {
        Style::default().fg(self.bright).add_modifier(Modifier::BOLD)
    }

    /// Links and clickable command lines.
    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.fg)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Block cursor and focused field labels.
    pub fn inverted(&self) -> Style {
        Style::default().fg(Color::Black).bg(self.fg)
    }
}
