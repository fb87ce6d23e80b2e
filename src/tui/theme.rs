//! Color theme for the TUI

use ratatui::style::Color;

/// Named colors used across the dashboard and form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,

    pub success: Color,
    /// Translucent success, used as a fill
    pub success_light: Color,
    pub attention: Color,
    /// Translucent attention, used as a fill
    pub attention_light: Color,

    pub shape: Color,
    pub title: Color,
    /// Neutral text, also the border of inactive buttons
    pub text: Color,
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

pub fn default_theme() -> Theme {
    Theme {
        primary: Color::Rgb(0x56, 0x36, 0xd3),
        secondary: Color::Rgb(0xff, 0x87, 0x2c),

        success: Color::Rgb(0x12, 0xa4, 0x54),
        // #12a454 at 50% over the background
        success_light: Color::Rgb(0x81, 0xcb, 0xa4),
        attention: Color::Rgb(0xe8, 0x3f, 0x5b),
        attention_light: Color::Rgb(0xec, 0x98, 0xa8),

        shape: Color::Rgb(0xff, 0xff, 0xff),
        title: Color::Rgb(0x36, 0x3f, 0x5f),
        text: Color::Rgb(0x96, 0x9c, 0xb2),
        background: Color::Rgb(0xf0, 0xf2, 0xf5),
    }
}
