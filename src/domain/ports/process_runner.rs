//! Process Runner Port
//!
//! Abstracts how a step's program is executed so the driver can run against
//! the real system or a recording runner (dry runs, tests).

use crate::domain::entities::Step;
use crate::error::DriverResult;

/// How a step's process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepExit {
    /// Process exited with a status code
    Code(i32),
    /// Process was terminated by a signal (Unix)
    Signal(i32),
}

impl StepExit {
    pub fn success(&self) -> bool {
        matches!(self, StepExit::Code(0))
    }

    /// Status as the driver reports it. Signals follow the shell's `128 + n`.
    pub fn code(&self) -> i32 {
        match self {
            StepExit::Code(code) => *code,
            StepExit::Signal(signal) => 128 + signal,
        }
    }
}

impl From<std::process::ExitStatus> for StepExit {
    fn from(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return StepExit::Code(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return StepExit::Signal(signal);
            }
        }

        StepExit::Code(1)
    }
}

/// Trait for executing steps
///
/// Implementations:
/// - `SystemRunner`: spawns the program with inherited stdio and waits
/// - `RecordingRunner`: records command lines without spawning anything
pub trait ProcessRunner {
    /// Run a step to completion.
    ///
    /// Returns `Err` only when the program could not be started; a program
    /// that ran and failed is an `Ok` with a non-zero exit.
    fn run(&self, step: &Step) -> DriverResult<StepExit>;

    /// Whether this runner actually starts processes
    fn spawns_processes(&self) -> bool {
        true
    }
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for Box<R> {
    fn run(&self, step: &Step) -> DriverResult<StepExit> {
        (**self).run(step)
    }

    fn spawns_processes(&self) -> bool {
        (**self).spawns_processes()
    }
}
