//! System Process Runner
//!
//! Spawns each step's program directly (no shell) and waits for it.
//! The terminal is shared with the child so credential prompts, log
//! streaming and Ctrl+C reach it unchanged.

use std::process::{Command, Stdio};

use crate::domain::entities::Step;
use crate::domain::ports::{ProcessRunner, StepExit};
use crate::error::{DriverError, DriverResult};

/// Where a child's stdout goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdoutMode {
    /// Child writes to the driver's stdout
    #[default]
    Inherit,
    /// Child stdout is redirected to the driver's stderr, keeping stdout
    /// clean for machine-readable output
    Stderr,
}

/// Runner that executes steps on the host
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    stdout: StdoutMode,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stdout(mut self, stdout: StdoutMode) -> Self {
        self.stdout = stdout;
        self
    }

    fn command(&self, step: &Step) -> Command {
        let mut cmd = Command::new(&step.program);
        cmd.args(&step.args)
            .stdin(Stdio::inherit()) // Allow password input
            .stderr(Stdio::inherit());

        match self.stdout {
            StdoutMode::Inherit => {
                cmd.stdout(Stdio::inherit());
            }
            StdoutMode::Stderr => {
                cmd.stdout(std::io::stderr());
            }
        }
        cmd
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, step: &Step) -> DriverResult<StepExit> {
        let status = self
            .command(step)
            .status()
            .map_err(|source| DriverError::Spawn {
                program: step.program.clone(),
                source,
            })?;

        Ok(StepExit::from(status))
    }
}
