use crate::ui::primitives::text::{paint, Tone};
use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Prompt,
}

impl Icon {
    pub fn glyph(self, supports_unicode: bool) -> &'static str {
        let set = theme::glyphs(supports_unicode);
        match self {
            Icon::Success => set.success,
            Icon::Error => set.error,
            Icon::Warning => set.warning,
            Icon::Arrow => set.arrow,
            Icon::Prompt => set.prompt,
        }
    }

    fn tone(self) -> Tone {
        match self {
            Icon::Success => Tone::Success,
            Icon::Error => Tone::Error,
            Icon::Warning => Tone::Warning,
            Icon::Arrow => Tone::Dim,
            Icon::Prompt => Tone::Accent,
        }
    }

    pub fn colored(self, supports_color: bool, supports_unicode: bool) -> String {
        paint(self.glyph(supports_unicode), self.tone(), supports_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_glyphs_without_unicode() {
        assert_eq!(Icon::Success.glyph(false), "[OK]");
        assert_eq!(Icon::Prompt.glyph(false), ">>>");
    }

    #[test]
    fn unicode_glyphs_when_supported() {
        assert_eq!(Icon::Warning.glyph(true), "⚠");
        assert_eq!(Icon::Arrow.glyph(true), "↳");
    }

    #[test]
    fn uncolored_icon_is_bare_glyph() {
        assert_eq!(Icon::Error.colored(false, false), "[FAIL]");
        assert!(Icon::Error.colored(true, false).contains("\u{1b}["));
    }
}
