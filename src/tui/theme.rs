//! Color theme for the TUI - using ANSI colors for better terminal compatibility

use ratatui::style::{Color, Modifier, Style};

/// Theme using ANSI colors that work well across terminal themes
pub struct Theme;

impl Theme {
    pub const CYAN: Color = Color::Cyan;
    pub const DARK_GRAY: Color = Color::DarkGray;

    pub fn text() -> Style {
        Style::default()
    }

    /// Highlighted menu row
    pub fn accent() -> Style {
        Style::default()
            .fg(Self::CYAN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::DARK_GRAY)
    }

    // Key hints
    pub fn key() -> Style {
        Style::default()
            .fg(Self::CYAN)
            .add_modifier(Modifier::BOLD)
    }
}
