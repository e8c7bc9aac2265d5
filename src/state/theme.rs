//! Light/dark theme handling
//!
//! The mode is the single persisted preference; the palette derived from it
//! is what draw functions consume.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Color scheme preference, stored as `"light"` / `"dark"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Palette for this mode
    pub fn theme(&self) -> Theme {
        match self {
            Self::Light => Theme {
                bg: Color::White,
                fg: Color::Black,
                accent: Color::Blue,
                muted: Color::Gray,
                error: Color::Red,
                success: Color::Green,
                bar_bg: Color::Gray,
            },
            Self::Dark => Theme {
                bg: Color::Reset,
                fg: Color::White,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                error: Color::LightRed,
                success: Color::LightGreen,
                bar_bg: Color::DarkGray,
            },
        }
    }
}

/// Colors used by every draw function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    pub success: Color,
    /// Status bar background
    pub bar_bg: Color,
}
