//! Step entity - one external process invocation

use std::borrow::Cow;

use serde::Serialize;

/// A single program invocation within a target.
///
/// Steps carry no working directory or environment of their own: they run
/// in the driver's current directory with the inherited environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Short label for progress output (e.g. "login")
    pub label: String,
    /// Program to execute, resolved through `PATH`
    pub program: String,
    /// Arguments passed verbatim, no shell involved
    pub args: Vec<String>,
    /// Step reads from the terminal (credential prompts)
    pub interactive: bool,
}

impl Step {
    pub fn new(label: impl Into<String>, program: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            program: program.into(),
            args: Vec::new(),
            interactive: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn interactive(mut self) -> Self {
        self.interactive = true;
        self
    }

    /// Render as a shell-like command line for echoing and dry runs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn shell_quote(word: &str) -> Cow<'_, str> {
    const SAFE: &str = "_-./:=,@%+";

    if word.is_empty() {
        return Cow::Borrowed("''");
    }
    if word
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || SAFE.contains(c))
    {
        return Cow::Borrowed(word);
    }
    Cow::Owned(format!("'{}'", word.replace('\'', r"'\''")))
}
