//! Execution Result
//!
//! Result types for target execution.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::value_objects::TargetName;

/// Outcome of one executed step
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub target: TargetName,
    pub label: String,
    pub command: String,
    pub exit_code: i32,
    /// Set when the program could not be started
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl StepReport {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0 && self.error.is_none()
    }
}

/// Result of executing one or more targets
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionReport {
    /// Steps that ran, in order; stops at the first failure
    pub steps: Vec<StepReport>,
    /// Exit code of the first failing step, or 0
    pub exit_code: i32,
    /// Steps were recorded instead of executed
    pub dry_run: bool,
    /// Ctrl+C stopped execution before every step ran
    pub interrupted: bool,
}

impl ExecutionReport {
    pub fn new(dry_run: bool) -> Self {
        Self {
            steps: Vec::new(),
            exit_code: 0,
            dry_run,
            interrupted: false,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// The step that stopped execution, if any
    pub fn failed_step(&self) -> Option<&StepReport> {
        self.steps.iter().find(|s| !s.is_success())
    }

    /// Targets that ran at least one step, in execution order
    pub fn targets(&self) -> Vec<TargetName> {
        let mut seen = Vec::new();
        for step in &self.steps {
            if seen.last() != Some(&step.target) {
                seen.push(step.target);
            }
        }
        seen
    }
}
