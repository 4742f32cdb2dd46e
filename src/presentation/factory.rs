//! Driver Factory
//!
//! Creates the driver with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::Driver;
use crate::config::Config;
use crate::domain::ports::ProcessRunner;
use crate::infrastructure::{RecordingRunner, StdoutMode, SystemRunner};

/// Driver over a runner chosen at runtime
pub type ConcreteDriver = Driver<Box<dyn ProcessRunner>>;

/// Options that decide how steps are executed
#[derive(Debug, Clone, Copy, Default)]
pub struct DriverOptions {
    /// Record command lines instead of executing them
    pub dry_run: bool,
    /// Keep stdout for machine-readable output
    pub json: bool,
}

/// Create a driver with all dependencies wired up
pub fn create_driver(config: Config, options: DriverOptions) -> ConcreteDriver {
    let runner: Box<dyn ProcessRunner> = if options.dry_run {
        Box::new(RecordingRunner::new())
    } else if options.json {
        Box::new(SystemRunner::new().with_stdout(StdoutMode::Stderr))
    } else {
        Box::new(SystemRunner::new())
    };

    Driver::new(runner, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_driver_does_not_spawn() {
        let driver = create_driver(
            Config::default(),
            DriverOptions {
                dry_run: true,
                json: false,
            },
        );
        assert!(!driver.runner().spawns_processes());
    }

    #[test]
    fn default_driver_spawns() {
        let driver = create_driver(Config::default(), DriverOptions::default());
        assert!(driver.runner().spawns_processes());
    }

    #[test]
    fn dry_run_executes_nothing_but_reports_every_step() {
        let driver = create_driver(
            Config::default(),
            DriverOptions {
                dry_run: true,
                json: true,
            },
        );
        let report = driver.run(&["push"]).unwrap();
        assert!(report.dry_run);
        assert_eq!(report.steps.len(), 2);
    }
}
