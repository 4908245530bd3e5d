//! Centralized theme configuration for all UI components.
//!
//! Colors are defined per palette below. Render code reads them through a
//! [`Theme`] resolved from the active [`ThemeMode`], so toggling the theme
//! is a single assignment on the app.
//!
//! The match navigation panel keeps the same dark look in both modes.

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Dark palette (Dracula)
pub mod dracula {
    use super::*;

    pub const BACKGROUND: Color = Color::Rgb(40, 42, 54);
    pub const CURRENT_LINE: Color = Color::Rgb(68, 71, 90);
    pub const FOREGROUND: Color = Color::Rgb(248, 248, 242);
    pub const COMMENT: Color = Color::Rgb(98, 114, 164);
    pub const CYAN: Color = Color::Rgb(139, 233, 253);
    pub const GREEN: Color = Color::Rgb(80, 250, 123);
    pub const ORANGE: Color = Color::Rgb(255, 184, 108);
    pub const PINK: Color = Color::Rgb(255, 121, 198);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);
    pub const YELLOW: Color = Color::Rgb(241, 250, 140);
}

/// Light palette
pub mod light {
    use super::*;

    pub const BACKGROUND: Color = Color::Rgb(250, 250, 250);
    pub const CURRENT_LINE: Color = Color::Rgb(232, 242, 255);
    pub const FOREGROUND: Color = Color::Rgb(36, 41, 47);
    pub const GUTTER: Color = Color::Rgb(153, 153, 153);
    pub const ACCENT: Color = Color::Rgb(9, 105, 218);
    pub const MATCH_BG: Color = Color::Rgb(255, 223, 93);
    pub const HEADER_BG: Color = Color::Rgb(234, 238, 242);
}

/// Match navigation panel (same in both modes)
pub mod panel {
    use super::*;

    pub const BACKGROUND: Color = Color::Rgb(40, 42, 54);
    pub const FOREGROUND: Color = Color::White;
    pub const BORDER: Color = Color::Rgb(98, 114, 164);
    pub const BUTTON: Style = Style::new()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
}

/// Notification toasts (same in both modes)
pub mod notification {
    use super::*;

    pub const INFO_FG: Color = Color::Rgb(248, 248, 242);
    pub const INFO_BG: Color = Color::Rgb(68, 71, 90);
    pub const INFO_BORDER: Color = Color::Rgb(98, 114, 164);

    pub const WARNING_FG: Color = Color::Black;
    pub const WARNING_BG: Color = Color::Rgb(241, 250, 140);
    pub const WARNING_BORDER: Color = Color::Rgb(255, 184, 108);

    pub const ERROR_FG: Color = Color::White;
    pub const ERROR_BG: Color = Color::Rgb(170, 40, 40);
    pub const ERROR_BORDER: Color = Color::Rgb(255, 85, 85);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Header indicator for the active mode
    pub fn icon(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☾ dark",
            ThemeMode::Light => "☀ light",
        }
    }
}

/// Resolved styles for one mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub text: Style,
    pub active_line: Style,
    pub line_number: Style,
    pub search_match: Style,
    pub header: Style,
    pub header_path: Style,
    pub hint_key: Style,
    pub hint_description: Style,
    pub dialog: Style,
    pub dialog_label: Style,
    pub cursor: Style,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                mode,
                text: Style::new().fg(dracula::FOREGROUND).bg(dracula::BACKGROUND),
                active_line: Style::new().bg(dracula::CURRENT_LINE),
                line_number: Style::new().fg(dracula::COMMENT).bg(dracula::BACKGROUND),
                search_match: Style::new().fg(dracula::BACKGROUND).bg(dracula::ORANGE),
                header: Style::new().fg(dracula::PURPLE).bg(dracula::CURRENT_LINE),
                header_path: Style::new().fg(dracula::FOREGROUND).bg(dracula::CURRENT_LINE),
                hint_key: Style::new().fg(dracula::CYAN),
                hint_description: Style::new()
                    .fg(dracula::COMMENT)
                    .add_modifier(Modifier::DIM),
                dialog: Style::new().fg(dracula::FOREGROUND).bg(dracula::CURRENT_LINE),
                dialog_label: Style::new().fg(dracula::PINK).bg(dracula::CURRENT_LINE),
                cursor: Style::new().add_modifier(Modifier::REVERSED),
            },
            ThemeMode::Light => Self {
                mode,
                text: Style::new().fg(light::FOREGROUND).bg(light::BACKGROUND),
                active_line: Style::new().bg(light::CURRENT_LINE),
                line_number: Style::new().fg(light::GUTTER).bg(light::BACKGROUND),
                search_match: Style::new().fg(light::FOREGROUND).bg(light::MATCH_BG),
                header: Style::new().fg(light::ACCENT).bg(light::HEADER_BG),
                header_path: Style::new().fg(light::FOREGROUND).bg(light::HEADER_BG),
                hint_key: Style::new().fg(light::ACCENT),
                hint_description: Style::new().fg(light::GUTTER),
                dialog: Style::new().fg(light::FOREGROUND).bg(light::HEADER_BG),
                dialog_label: Style::new().fg(light::ACCENT).bg(light::HEADER_BG),
                cursor: Style::new().add_modifier(Modifier::REVERSED),
            },
        }
    }
}
