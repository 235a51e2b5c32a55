use ratatui::style::Color;

use crate::theme::Theme;

/// Dark slate base with cyan and violet accents.
pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x02, 0x06, 0x17),
        bg1: Color::Rgb(0x0f, 0x17, 0x2a),
        bg2: Color::Rgb(0x1e, 0x29, 0x3b),
        border: Color::Rgb(0x33, 0x41, 0x55),
        fg0: Color::Rgb(0xe2, 0xe8, 0xf0),
        fg1: Color::Rgb(0x94, 0xa3, 0xb8),
        muted: Color::Rgb(0x64, 0x74, 0x8b),
        accent: Color::Rgb(0x22, 0xd3, 0xee),
        accent_alt: Color::Rgb(0xa7, 0x8b, 0xfa),
        success: Color::Rgb(0x34, 0xd3, 0x99),
        warning: Color::Rgb(0xfb, 0xbf, 0x24),
        error: Color::Rgb(0xf8, 0x71, 0x71),
    }
}
