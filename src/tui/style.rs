//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::RowStyleClass;

/// Grid color palette.
pub struct Theme;

impl Theme {
    // Background colors
    pub const BG: Color = Color::Reset;
    pub const HEADER_BG: Color = Color::Blue;
    pub const SELECTED_BG: Color = Color::DarkGray;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    pub const AGGREGATED: Color = Color::Cyan;
    pub const ACCENT: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const OK: Color = Color::Green;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row style.
    pub fn selected() -> Style {
        Style::default()
            .bg(Theme::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Totals row style.
    pub fn totals() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Per-location aggregate row style (cyan).
    pub fn aggregated() -> Style {
        Style::default().fg(Theme::AGGREGATED)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Key hint style (yellow).
    pub fn key_hint() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    /// Error text style (red).
    pub fn error() -> Style {
        Style::default()
            .fg(Theme::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Popup border.
    pub fn popup_border() -> Style {
        Style::default().fg(Color::Cyan)
    }

    /// Maps a view-model row class to a ratatui style.
    pub fn from_class(class: RowStyleClass) -> Style {
        match class {
            RowStyleClass::Normal => Self::default(),
            RowStyleClass::Aggregated => Self::aggregated(),
            RowStyleClass::Totals => Self::totals(),
        }
    }
}
