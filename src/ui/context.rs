use qdii_deploy::presentation::{Cli, ColorWhen};

use crate::ui::terminal::TerminalCapabilities;

/// Rendering decisions shared by every view and sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn from_cli(cli: &Cli) -> Self {
        Self::resolve(cli.json, cli.verbose, cli.color, TerminalCapabilities::detect())
    }

    fn resolve(
        json: bool,
        verbose: u8,
        color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        // CI logs rarely render escapes; `--color always` still forces them.
        let detected = caps.supports_color && !caps.is_ci;

        Self {
            json,
            verbose,
            color: color.unwrap_or(ColorWhen::Auto).enabled(detected),
            unicode: caps.supports_unicode,
        }
    }
}
