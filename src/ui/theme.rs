//! Colors and glyphs for terminal output.
//!
//! Every styled glyph the CLI prints comes from this module.

use crossterm::style::Color;

pub const SUCCESS: Color = Color::Green;
pub const ERROR: Color = Color::Red;
pub const WARNING: Color = Color::Yellow;
pub const ACCENT: Color = Color::Cyan;
pub const MUTED: Color = Color::DarkGrey;

/// Glyph set for one rendering mode
#[derive(Debug)]
pub struct Glyphs {
    pub success: &'static str,
    pub error: &'static str,
    pub warning: &'static str,
    pub arrow: &'static str,
    pub prompt: &'static str,
}

pub const UNICODE: Glyphs = Glyphs {
    success: "✓",
    error: "✗",
    warning: "⚠",
    arrow: "↳",
    prompt: "›",
};

/// Plain-ASCII fallback; `>>>` keeps echoed commands greppable in CI logs.
pub const ASCII: Glyphs = Glyphs {
    success: "[OK]",
    error: "[FAIL]",
    warning: "[WARN]",
    arrow: "[>]",
    prompt: ">>>",
};

pub fn glyphs(unicode: bool) -> &'static Glyphs {
    if unicode {
        &UNICODE
    } else {
        &ASCII
    }
}
