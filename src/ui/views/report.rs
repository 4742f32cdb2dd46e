use qdii_deploy::ExecutionReport;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::{paint, Tone};

/// One-line summary printed after the last step.
pub struct ReportView<'a> {
    report: &'a ExecutionReport,
}

impl<'a> ReportView<'a> {
    pub fn new(report: &'a ExecutionReport) -> Self {
        Self { report }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let report = self.report;

        if report.interrupted {
            let count = report.steps.len();
            return format!(
                "{} {}\n",
                Icon::Error.colored(supports_color, supports_unicode),
                paint(
                    &format!(
                        "interrupted after {count} step{} (exit {})",
                        if count == 1 { "" } else { "s" },
                        report.exit_code
                    ),
                    Tone::Error,
                    supports_color
                )
            );
        }

        if let Some(failed) = report.failed_step() {
            let reason = match &failed.error {
                Some(_) => format!("could not start '{}'", failed.label),
                None => format!("failed at '{}'", failed.label),
            };
            return format!(
                "{} {}\n",
                Icon::Error.colored(supports_color, supports_unicode),
                paint(
                    &format!("{} {} (exit {})", failed.target, reason, report.exit_code),
                    Tone::Error,
                    supports_color
                )
            );
        }

        let targets = report
            .targets()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let count = report.steps.len();
        let verb = if report.dry_run { "planned" } else { "ran" };

        format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            paint(
                &format!(
                    "{targets}: {verb} {count} step{}",
                    if count == 1 { "" } else { "s" }
                ),
                Tone::Success,
                supports_color
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdii_deploy::infrastructure::RecordingRunner;
    use qdii_deploy::{Config, Driver};

    #[test]
    fn summary_names_targets_and_step_count() {
        let driver = Driver::new(RecordingRunner::new(), Config::default());
        let report = driver.run(&["build", "pull"]).unwrap();

        let rendered = ReportView::new(&report).render(false, false);
        assert_eq!(rendered, "[OK] build, pull: planned 3 steps\n");
    }

    #[test]
    fn failure_names_step_and_exit_code() {
        let driver = Driver::new(RecordingRunner::new().exit_on("login", 1), Config::default());
        let report = driver.run(&["push"]).unwrap();

        let rendered = ReportView::new(&report).render(false, false);
        assert_eq!(rendered, "[FAIL] push failed at 'login' (exit 1)\n");
    }

    #[test]
    fn interrupt_wins_over_step_summary() {
        let flag = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let driver = Driver::new(RecordingRunner::new(), Config::default())
            .with_interrupt_flag(flag);
        let report = driver.run(&["build"]).unwrap();

        let rendered = ReportView::new(&report).render(false, false);
        assert_eq!(rendered, "[FAIL] interrupted after 0 steps (exit 130)\n");
    }

    #[test]
    fn missing_program_is_reported_as_not_started() {
        let driver = Driver::new(
            RecordingRunner::new().missing_program("conda"),
            Config::default(),
        );
        let report = driver.run(&["run"]).unwrap();

        let rendered = ReportView::new(&report).render(false, true);
        assert_eq!(rendered, "✗ run could not start 'serve' (exit 127)\n");
    }
}
