//! Console command echo
//!
//! Prints each command before it runs, like make does. Dry runs print the
//! bare command lines on stdout so they can be piped into a shell.

use qdii_deploy::domain::ports::{DriverEvent, DriverEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, strong, Tone};

pub struct ConsoleEventSink {
    ui: UiContext,
    dry_run: bool,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext, dry_run: bool) -> Self {
        Self { ui, dry_run }
    }

    /// Text for an event and whether it belongs on stdout.
    fn render(&self, event: &DriverEvent) -> Option<(String, bool)> {
        let (color, unicode) = (self.ui.color, self.ui.unicode);
        match event {
            DriverEvent::TargetStarted { target, step_count } if self.ui.verbose > 0 => Some((
                format!(
                    "{} {} ({} step{})",
                    Icon::Arrow.colored(color, unicode),
                    strong(target.as_str(), color),
                    step_count,
                    if *step_count == 1 { "" } else { "s" }
                ),
                false,
            )),
            DriverEvent::StepStarted { step, .. } if self.dry_run => {
                Some((step.command_line(), true))
            }
            DriverEvent::StepStarted { step, .. } => Some((
                format!(
                    "{} {}",
                    Icon::Prompt.colored(color, unicode),
                    step.command_line()
                ),
                false,
            )),
            DriverEvent::StepFinished {
                target, exit_code, ..
            } if *exit_code != 0 => Some((
                format!(
                    "{} {}",
                    Icon::Error.colored(color, unicode),
                    paint(
                        &format!("{target}: command exited with status {exit_code}"),
                        Tone::Error,
                        color
                    )
                ),
                false,
            )),
            DriverEvent::StepFinished { duration_ms, .. } if self.ui.verbose > 1 => Some((
                paint(&format!("  finished in {duration_ms} ms"), Tone::Dim, color),
                false,
            )),
            DriverEvent::StepFailedToStart { target, error, .. } => Some((
                format!(
                    "{} {}",
                    Icon::Error.colored(color, unicode),
                    paint(&format!("{target}: {error}"), Tone::Error, color)
                ),
                false,
            )),
            DriverEvent::Interrupted { target, exit_code } => Some((
                format!(
                    "{} {}",
                    Icon::Error.colored(color, unicode),
                    paint(
                        &format!("{target}: interrupted, remaining steps skipped (exit {exit_code})"),
                        Tone::Error,
                        color
                    )
                ),
                false,
            )),
            _ => None,
        }
    }
}

impl DriverEventSink for ConsoleEventSink {
    fn on_event(&self, event: DriverEvent) {
        match self.render(&event) {
            Some((line, true)) => println!("{line}"),
            Some((line, false)) => eprintln!("{line}"),
            None => {}
        }
    }
}
