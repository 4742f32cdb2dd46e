//! Target planning service
//!
//! Pure domain logic mapping a target name to its fixed command sequence.
//! Nothing here checks the host (image presence, port availability): the
//! wrapped tools report those failures themselves.

use crate::config::Config;
use crate::domain::entities::{Step, TargetPlan};
use crate::domain::value_objects::TargetName;

/// Build the command sequence for a target.
pub fn plan(target: TargetName, config: &Config) -> TargetPlan {
    let steps = match target {
        TargetName::Run => run_steps(config),
        TargetName::Build => build_steps(config),
        TargetName::Push => push_steps(config),
        TargetName::Pull => pull_steps(config),
    };
    TargetPlan::new(target, steps)
}

/// Plans for every target, in catalogue order.
pub fn plan_all(config: &Config) -> Vec<TargetPlan> {
    TargetName::ALL
        .iter()
        .map(|target| plan(*target, config))
        .collect()
}

fn run_steps(config: &Config) -> Vec<Step> {
    let dashboard = &config.dashboard;
    vec![Step::new("serve", &dashboard.env_manager)
        .args(["run", "--no-capture-output", "-n"])
        .arg(&dashboard.env_name)
        .arg(&dashboard.server)
        .arg("run")
        .arg(&dashboard.entry)
        .arg("--server.port")
        .arg(dashboard.port.to_string())]
}

fn build_steps(config: &Config) -> Vec<Step> {
    let image = &config.image;
    vec![Step::new("build", &image.engine)
        .args(["build", "-t"])
        .arg(&image.name)
        .arg(&image.context)]
}

fn push_steps(config: &Config) -> Vec<Step> {
    let image = &config.image;
    vec![
        Step::new("login", &image.engine).arg("login").interactive(),
        Step::new("buildx", &image.engine)
            .args(["buildx", "build", "--platform"])
            .arg(image.platform_list())
            .arg("-t")
            .arg(image.published_reference())
            .arg("--push")
            .arg(&image.context),
    ]
}

fn pull_steps(config: &Config) -> Vec<Step> {
    let image = &config.image;
    let reference = image.published_reference();
    let port = config.dashboard.port;
    vec![
        Step::new("pull", &image.engine)
            .arg("pull")
            .arg(&reference),
        Step::new("start", &image.engine)
            .args(["run", "--rm", "-d", "-p"])
            .arg(format!("{port}:{port}"))
            .arg(reference),
    ]
}
