//! Output Rendering
//!
//! Machine-readable documents for `--json`. Human-readable views live with
//! the binary's UI.

use std::path::Path;

use crate::application::ExecutionReport;
use crate::domain::entities::TargetPlan;

/// Target catalogue as a JSON document
pub fn target_list_json(plans: &[TargetPlan], config_source: Option<&Path>) -> serde_json::Value {
    serde_json::json!({
        "event": "targets",
        "config": config_source.map(|p| p.display().to_string()),
        "targets": plans
            .iter()
            .map(|plan| serde_json::json!({
                "name": plan.target,
                "description": plan.description,
                "commands": plan.command_lines(),
            }))
            .collect::<Vec<_>>(),
    })
}

/// Final execution report as a JSON document
pub fn report_json(report: &ExecutionReport) -> serde_json::Value {
    serde_json::json!({
        "event": "report",
        "success": report.is_success(),
        "exit_code": report.exit_code,
        "dry_run": report.dry_run,
        "interrupted": report.interrupted,
        "steps": report.steps,
    })
}

/// Driver-level failure as a JSON document
pub fn error_json(message: &str, exit_code: i32) -> serde_json::Value {
    serde_json::json!({
        "event": "error",
        "success": false,
        "error": message,
        "exit_code": exit_code,
    })
}
