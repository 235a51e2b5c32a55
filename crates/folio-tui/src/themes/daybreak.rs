use ratatui::style::Color;

use crate::theme::Theme;

/// Light paper base with teal and indigo accents.
pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0xfa, 0xfa, 0xf6),
        bg1: Color::Rgb(0xf1, 0xf0, 0xe9),
        bg2: Color::Rgb(0xe4, 0xe2, 0xd6),
        border: Color::Rgb(0xc4, 0xc2, 0xb4),
        fg0: Color::Rgb(0x1f, 0x29, 0x37),
        fg1: Color::Rgb(0x4b, 0x55, 0x63),
        muted: Color::Rgb(0x8a, 0x91, 0x9c),
        accent: Color::Rgb(0x0e, 0x74, 0x90),
        accent_alt: Color::Rgb(0x5b, 0x4f, 0xc7),
        success: Color::Rgb(0x16, 0x83, 0x4a),
        warning: Color::Rgb(0xb4, 0x68, 0x09),
        error: Color::Rgb(0xb4, 0x23, 0x2e),
    }
}
