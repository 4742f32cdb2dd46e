//! JSON Event Sink
//!
//! Outputs driver events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DriverEvent, DriverEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    dry_run: bool,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(dry_run: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
            dry_run,
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W, dry_run: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            dry_run,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DriverEventSink for JsonEventSink {
    fn on_event(&self, event: DriverEvent) {
        let json = match event {
            DriverEvent::TargetStarted { target, step_count } => {
                serde_json::json!({
                    "event": "target_start",
                    "target": target,
                    "steps": step_count,
                    "dry_run": self.dry_run,
                })
            }

            DriverEvent::StepStarted {
                target,
                index,
                step,
            } => {
                serde_json::json!({
                    "event": "step_start",
                    "target": target,
                    "index": index,
                    "label": step.label,
                    "command": step.command_line(),
                    "interactive": step.interactive,
                })
            }

            DriverEvent::StepFinished {
                target,
                index,
                exit_code,
                duration_ms,
            } => {
                serde_json::json!({
                    "event": "step_finish",
                    "target": target,
                    "index": index,
                    "exit_code": exit_code,
                    "duration_ms": duration_ms,
                })
            }

            DriverEvent::StepFailedToStart {
                target,
                index,
                error,
                exit_code,
            } => {
                serde_json::json!({
                    "event": "step_error",
                    "target": target,
                    "index": index,
                    "error": error,
                    "exit_code": exit_code,
                })
            }

            DriverEvent::Interrupted { target, exit_code } => {
                serde_json::json!({
                    "event": "interrupted",
                    "target": target,
                    "exit_code": exit_code,
                })
            }

            DriverEvent::Completed {
                steps_run,
                exit_code,
            } => {
                let status = if exit_code == 0 { "success" } else { "failed" };
                serde_json::json!({
                    "event": "complete",
                    "status": status,
                    "steps": steps_run,
                    "exit_code": exit_code,
                    "dry_run": self.dry_run,
                })
            }
        };

        self.write_event(json);
    }
}
