//! Recording Process Runner
//!
//! Records every step it is asked to run and never starts a process.
//! Backs `--dry-run` and lets tests script exit codes per step label.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::entities::Step;
use crate::domain::ports::{ProcessRunner, StepExit};
use crate::error::{DriverError, DriverResult};

/// Runner that records steps instead of executing them
#[derive(Debug, Default)]
pub struct RecordingRunner {
    recorded: RefCell<Vec<Step>>,
    exits: HashMap<String, i32>,
    missing_programs: Vec<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the step with this label exit with `code`.
    pub fn exit_on(mut self, label: impl Into<String>, code: i32) -> Self {
        self.exits.insert(label.into(), code);
        self
    }

    /// Make every step using `program` fail to start, as if not installed.
    pub fn missing_program(mut self, program: impl Into<String>) -> Self {
        self.missing_programs.push(program.into());
        self
    }

    /// Steps seen so far, in order
    pub fn recorded(&self) -> Vec<Step> {
        self.recorded.borrow().clone()
    }

    /// Command lines seen so far, in order
    pub fn command_lines(&self) -> Vec<String> {
        self.recorded
            .borrow()
            .iter()
            .map(Step::command_line)
            .collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, step: &Step) -> DriverResult<StepExit> {
        self.recorded.borrow_mut().push(step.clone());

        if self.missing_programs.contains(&step.program) {
            return Err(DriverError::Spawn {
                program: step.program.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }

        let code = self.exits.get(&step.label).copied().unwrap_or(0);
        Ok(StepExit::Code(code))
    }

    fn spawns_processes(&self) -> bool {
        false
    }
}
