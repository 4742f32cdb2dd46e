use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Accent,
    Dim,
}

impl Tone {
    fn color(self) -> crossterm::style::Color {
        match self {
            Tone::Success => theme::SUCCESS,
            Tone::Error => theme::ERROR,
            Tone::Warning => theme::WARNING,
            Tone::Accent => theme::ACCENT,
            Tone::Dim => theme::MUTED,
        }
    }
}

/// Color `text` with a semantic tone, or return it unchanged when color is off.
pub fn paint(text: &str, tone: Tone, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    format!("{}", text.with(tone.color()))
}

/// Bold `text` when color is on.
pub fn strong(text: &str, supports_color: bool) -> String {
    if !supports_color {
        return text.to_string();
    }
    format!("{}", text.bold())
}
