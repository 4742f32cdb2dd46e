//! Terminal capability probe.
//!
//! Echo, warnings and errors go to stderr, so stderr is the stream probed.

use is_terminal::IsTerminal;

/// Markers set by common CI services.
const CI_MARKERS: &[&str] = &["CI", "GITHUB_ACTIONS", "GITLAB_CI", "BUILDKITE", "JENKINS_URL"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    pub fn detect() -> Self {
        Self::probe(|key| std::env::var(key).ok(), std::io::stderr().is_terminal())
    }

    fn probe(var: impl Fn(&str) -> Option<String>, is_tty: bool) -> Self {
        let dumb = var("TERM").is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        let no_color = var("NO_COLOR").is_some_and(|v| !v.is_empty());

        Self {
            supports_color: is_tty && !dumb && !no_color,
            supports_unicode: !dumb && !ascii_locale(&var),
            is_ci: CI_MARKERS.iter().any(|key| var(key).is_some()),
        }
    }
}

/// `C` and `POSIX` locales promise nothing beyond ASCII.
fn ascii_locale(var: &impl Fn(&str) -> Option<String>) -> bool {
    // The first non-empty variable decides, as with setlocale(3).
    let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|key| var(key).filter(|v| !v.is_empty()));
    matches!(locale.as_deref(), Some("C" | "POSIX"))
}
