//! Target plan entity - a target and its ordered steps

use serde::Serialize;

use super::Step;
use crate::domain::value_objects::TargetName;

/// The resolved command sequence for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetPlan {
    pub target: TargetName,
    pub description: String,
    pub steps: Vec<Step>,
}

impl TargetPlan {
    pub fn new(target: TargetName, steps: Vec<Step>) -> Self {
        Self {
            target,
            description: target.description().to_string(),
            steps,
        }
    }

    /// Command lines of every step, in execution order.
    pub fn command_lines(&self) -> Vec<String> {
        self.steps.iter().map(Step::command_line).collect()
    }
}
