//! Color palette for the TUI.
//!
//! One opinionated dark palette used by all rendering code: neutral
//! backgrounds, two text emphasis levels, and a few semantic accents.

use ratatui::style::Color;

/// Application palette consumed by the widgets.
pub struct Theme {
    /// Primary canvas background.
    pub base: Color,
    /// Panel background one level above the canvas.
    pub surface: Color,
    /// Muted border/divider color.
    pub overlay: Color,
    /// Primary foreground text.
    pub text: Color,
    /// Secondary text for captions and metadata.
    pub subtext: Color,
    /// Selection and interactive highlight.
    pub accent: Color,
    /// Emphasis for headings and the active tab.
    pub highlight: Color,
    /// Positive state (prices, success notes).
    pub green: Color,
    /// Attention state (loading hints).
    pub yellow: Color,
    /// Error state.
    pub red: Color,
}

/// Build a [`Color::Rgb`] from an 8-bit triplet.
const fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// The default palette.
#[must_use]
pub const fn theme() -> Theme {
    Theme {
        base: hex((0x1e, 0x1e, 0x2e)),
        surface: hex((0x31, 0x32, 0x44)),
        overlay: hex((0x6c, 0x70, 0x86)),
        text: hex((0xcd, 0xd6, 0xf4)),
        subtext: hex((0xa6, 0xad, 0xc8)),
        accent: hex((0x74, 0xc7, 0xec)),
        highlight: hex((0xcb, 0xa6, 0xf7)),
        green: hex((0xa6, 0xe3, 0xa1)),
        yellow: hex((0xf9, 0xe2, 0xaf)),
        red: hex((0xf3, 0x8b, 0xa8)),
    }
}
