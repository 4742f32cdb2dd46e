//! Execute command handler
//!
//! Resolves the requested targets, runs their steps and hands back the exit
//! code the process should end with.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;

use qdii_deploy::infrastructure::JsonEventSink;
use qdii_deploy::presentation::factory::{create_driver, DriverOptions};
use qdii_deploy::presentation::output::report_json;
use qdii_deploy::Config;

use crate::ui::context::UiContext;
use crate::ui::echo::ConsoleEventSink;
use crate::ui::views::report::ReportView;

pub fn cmd_execute(config: Config, targets: &[String], dry_run: bool, ui: &UiContext) -> Result<i32> {
    let options = DriverOptions {
        dry_run,
        json: ui.json,
    };

    let interrupted = Arc::new(AtomicBool::new(false));
    let driver = create_driver(config, options).with_interrupt_flag(interrupted.clone());
    let driver = if ui.json {
        driver.with_events(JsonEventSink::stdout(dry_run))
    } else {
        driver.with_events(ConsoleEventSink::new(*ui, dry_run))
    };

    // Nothing runs unless every name resolves.
    let plans = driver.resolve(targets)?;
    if !dry_run {
        install_interrupt_handler(interrupted);
    }

    let report = driver.execute(&plans);
    tracing::info!(
        exit_code = report.exit_code,
        steps = report.steps.len(),
        "targets finished"
    );

    if ui.json {
        println!("{}", report_json(&report));
    } else if ui.verbose > 0 {
        eprint!("{}", ReportView::new(&report).render(ui.color, ui.unicode));
    }

    Ok(report.exit_code)
}

/// Keep the driver alive on Ctrl+C and stop before the next step.
///
/// The terminal delivers the interrupt to the running child as well; the
/// child decides how to exit, then nothing further runs.
fn install_interrupt_handler(interrupted: Arc<AtomicBool>) {
    let installed = ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
        tracing::info!("interrupt received, waiting for the running step to exit");
    });
    if let Err(err) = installed {
        tracing::warn!(error = %err, "could not install Ctrl+C handler");
    }
}
