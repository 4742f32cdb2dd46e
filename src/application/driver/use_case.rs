//! Driver Use Case
//!
//! Orchestrates a target invocation:
//! 1. Resolve every requested name (all-or-nothing)
//! 2. Plan each target's steps from configuration
//! 3. Run steps in order through the process runner
//! 4. Stop at the first failing step and report its exit code
//! 5. Stop before the next step once Ctrl+C has been seen (exit 130)
//!
//! The driver never inspects, retries, or translates a tool's failure.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use crate::config::Config;
use crate::domain::entities::TargetPlan;
use crate::domain::ports::{DriverEvent, DriverEventSink, NoopEventSink, ProcessRunner};
use crate::domain::services::{plan, plan_all};
use crate::domain::value_objects::TargetName;
use crate::error::{DriverResult, EXIT_INTERRUPTED};

use super::result::{ExecutionReport, StepReport};

/// Named-target command runner
///
/// Parameterized by its process runner so the same flow serves real
/// execution, dry runs, and tests.
pub struct Driver<R: ProcessRunner> {
    runner: R,
    config: Config,
    events: Box<dyn DriverEventSink>,
    interrupted: Arc<AtomicBool>,
}

impl<R: ProcessRunner> Driver<R> {
    pub fn new(runner: R, config: Config) -> Self {
        Self {
            runner,
            config,
            events: Box::new(NoopEventSink),
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Share the flag a Ctrl+C handler sets; checked before every step.
    pub fn with_interrupt_flag(mut self, interrupted: Arc<AtomicBool>) -> Self {
        self.interrupted = interrupted;
        self
    }

    pub fn with_events(mut self, events: impl DriverEventSink + 'static) -> Self {
        self.events = Box::new(events);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Catalogue of every target with its planned steps.
    pub fn targets(&self) -> Vec<TargetPlan> {
        plan_all(&self.config)
    }

    /// Resolve requested target words into plans.
    ///
    /// Fails on the first unknown word before anything runs. A target named
    /// more than once is planned once, at its first position.
    pub fn resolve<S: AsRef<str>>(&self, words: &[S]) -> DriverResult<Vec<TargetPlan>> {
        let mut names: Vec<TargetName> = Vec::with_capacity(words.len());
        for word in words {
            let name: TargetName = word.as_ref().parse()?;
            if !names.contains(&name) {
                names.push(name);
            }
        }

        Ok(names
            .into_iter()
            .map(|name| plan(name, &self.config))
            .collect())
    }

    /// Execute plans in order, stopping at the first failing step.
    pub fn execute(&self, plans: &[TargetPlan]) -> ExecutionReport {
        let mut report = ExecutionReport::new(!self.runner.spawns_processes());

        'targets: for target_plan in plans {
            let target = target_plan.target;
            self.events.on_event(DriverEvent::TargetStarted {
                target,
                step_count: target_plan.steps.len(),
            });

            for (index, step) in target_plan.steps.iter().enumerate() {
                if self.interrupted.load(Ordering::SeqCst) {
                    tracing::warn!(name = %target, step = %step.label, "interrupted, skipping remaining steps");
                    self.events.on_event(DriverEvent::Interrupted {
                        target,
                        exit_code: EXIT_INTERRUPTED,
                    });
                    report.exit_code = EXIT_INTERRUPTED;
                    report.interrupted = true;
                    break 'targets;
                }

                self.events.on_event(DriverEvent::StepStarted {
                    target,
                    index,
                    step: step.clone(),
                });
                tracing::info!(
                    name = %target,
                    step = %step.label,
                    program = %step.program,
                    args = ?step.args,
                    "running step"
                );

                let started_at = Utc::now();
                let clock = Instant::now();
                let outcome = self.runner.run(step);
                let duration_ms = clock.elapsed().as_millis() as u64;

                let step_report = match outcome {
                    Ok(exit) => {
                        tracing::debug!(name = %target, step = %step.label, exit = ?exit, "step finished");
                        self.events.on_event(DriverEvent::StepFinished {
                            target,
                            index,
                            exit_code: exit.code(),
                            duration_ms,
                        });
                        StepReport {
                            target,
                            label: step.label.clone(),
                            command: step.command_line(),
                            exit_code: exit.code(),
                            error: None,
                            started_at,
                            duration_ms,
                        }
                    }
                    Err(err) => {
                        tracing::debug!(name = %target, step = %step.label, error = %err, "step failed to start");
                        self.events.on_event(DriverEvent::StepFailedToStart {
                            target,
                            index,
                            error: err.to_string(),
                            exit_code: err.exit_code(),
                        });
                        StepReport {
                            target,
                            label: step.label.clone(),
                            command: step.command_line(),
                            exit_code: err.exit_code(),
                            error: Some(err.to_string()),
                            started_at,
                            duration_ms,
                        }
                    }
                };

                let failed = !step_report.is_success();
                if failed {
                    report.exit_code = step_report.exit_code;
                }
                report.steps.push(step_report);
                if failed {
                    break 'targets;
                }
            }
        }

        self.events.on_event(DriverEvent::Completed {
            steps_run: report.steps.len(),
            exit_code: report.exit_code,
        });
        report
    }

    /// Resolve then execute.
    pub fn run<S: AsRef<str>>(&self, words: &[S]) -> DriverResult<ExecutionReport> {
        let plans = self.resolve(words)?;
        Ok(self.execute(&plans))
    }
}
