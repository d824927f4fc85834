//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors and styles used throughout the
//! application, so panels stay visually consistent.

use ratatui::style::{Color, Modifier, Style};

/// Core color palette for the application
pub struct Colors;

impl Colors {
    /// Primary accent - titles, active stepper indicator, focused fields
    pub const PRIMARY: Color = Color::Cyan;

    /// Completed stepper indicators, success status
    pub const SUCCESS: Color = Color::Green;

    /// Error status messages
    pub const ERROR: Color = Color::Red;

    /// Secondary/muted text
    pub const SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text - upcoming stepper indicators, placeholders
    pub const MUTED: Color = Color::DarkGray;

    /// Selection highlight background
    pub const HIGHLIGHT_BG: Color = Color::Rgb(30, 30, 40);
}

/// Pre-built styles for common elements
pub struct Styles;

impl Styles {
    /// Panel/step title
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// The focused form field line
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .bg(Colors::HIGHLIGHT_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Keybinding hint in the nav bar
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Error status line
    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Success status line
    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    /// Muted helper text
    pub fn muted() -> Style {
        Style::default().fg(Colors::MUTED)
    }
}
