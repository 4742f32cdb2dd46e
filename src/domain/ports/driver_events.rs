//! Driver Event Port
//!
//! Observable interface for target execution. Enables command echo,
//! NDJSON event streams, and silent operation in tests.

use crate::domain::entities::Step;
use crate::domain::value_objects::TargetName;

/// Event emitted while executing targets
#[derive(Debug, Clone)]
pub enum DriverEvent {
    /// Target started
    TargetStarted {
        target: TargetName,
        step_count: usize,
    },

    /// Step is about to run
    StepStarted {
        target: TargetName,
        index: usize,
        step: Step,
    },

    /// Step finished (any exit status)
    StepFinished {
        target: TargetName,
        index: usize,
        exit_code: i32,
        duration_ms: u64,
    },

    /// Step's program could not be started
    StepFailedToStart {
        target: TargetName,
        index: usize,
        error: String,
        exit_code: i32,
    },

    /// Ctrl+C arrived; the remaining steps are skipped
    Interrupted { target: TargetName, exit_code: i32 },

    /// Execution ended (success or first failure)
    Completed {
        steps_run: usize,
        exit_code: i32,
    },
}

/// Trait for receiving driver events
pub trait DriverEventSink {
    fn on_event(&self, event: DriverEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DriverEventSink for NoopEventSink {
    fn on_event(&self, _event: DriverEvent) {}
}
