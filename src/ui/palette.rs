//! Color palettes for the two theme states.
//!
//! The active palette is picked once per frame from the page's theme snapshot
//! and applied at the root of the frame; every widget below styles itself
//! from the same palette.

use ratatui::style::{Color, Modifier, Style};

use crate::state::ThemeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Frame background
    pub background: Color,
    /// Primary text
    pub foreground: Color,
    /// Secondary text (taglines, periods, descriptions)
    pub muted: Color,
    /// Headings and highlighted names
    pub accent: Color,
    /// Rules, card bars, tag text
    pub border: Color,
    /// Link chips
    pub link: Color,
    /// Focused link chip background
    pub focus: Color,
}

// ============================================================================
// Dark
// ============================================================================

pub const DARK: Palette = Palette {
    background: Color::Rgb(10, 10, 18),
    foreground: Color::Rgb(230, 230, 235),
    muted: Color::Rgb(140, 140, 155),
    accent: Color::Rgb(129, 140, 248),
    border: Color::DarkGray,
    link: Color::Rgb(125, 211, 252),
    focus: Color::Rgb(55, 65, 120),
};

// ============================================================================
// Light
// ============================================================================

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(250, 250, 252),
    foreground: Color::Rgb(24, 24, 32),
    muted: Color::Rgb(100, 100, 115),
    accent: Color::Rgb(67, 56, 202),
    border: Color::Gray,
    link: Color::Rgb(3, 105, 161),
    focus: Color::Rgb(199, 210, 254),
};

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> &'static Palette {
        if mode.is_dark() {
            &DARK
        } else {
            &LIGHT
        }
    }

    /// Root style for the whole frame.
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn strong(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn link(&self, focused: bool) -> Style {
        let style = Style::default()
            .fg(self.link)
            .add_modifier(Modifier::UNDERLINED);
        if focused {
            style.bg(self.focus).add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}
