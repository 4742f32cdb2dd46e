//! qdii-deploy CLI - deployment driver for the QDII data dashboard
//!
//! Usage: qdii-deploy [OPTIONS] [TARGET]...
//!
//! Targets:
//!   run    Serve the dashboard in the named environment
//!   build  Build the container image
//!   push   Log in and push a multi-platform image
//!   pull   Pull the published image and run it detached

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

use qdii_deploy::config::load_layered;
use qdii_deploy::error::EXIT_USAGE;
use qdii_deploy::presentation::Cli;

mod commands;
mod logging;
mod ui;

use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    let ui = UiContext::from_cli(&cli);
    logging::init(cli.verbose, ui.color);

    let code = match run(cli, &ui) {
        Ok(code) => code,
        Err(err) => {
            ui::error::print_error(&err, &ui);
            ui::error::exit_code_for(&err)
        }
    };

    let _ = std::io::stdout().flush();
    std::process::exit(code);
}

fn run(cli: Cli, ui: &UiContext) -> Result<i32> {
    let cwd = std::env::current_dir().context("failed to read the working directory")?;
    let loaded = load_layered(cli.config.as_deref(), &cwd)?;
    ui::error::print_config_warnings(&loaded.warnings, ui);

    if cli.list {
        commands::list::cmd_list(&loaded, ui);
        return Ok(0);
    }

    if cli.targets.is_empty() {
        commands::list::cmd_list(&loaded, ui);
        if !ui.json {
            eprintln!("No target given. Usage: qdii-deploy [OPTIONS] [TARGET]...");
        }
        return Ok(EXIT_USAGE);
    }

    commands::execute::cmd_execute(loaded.config, &cli.targets, cli.dry_run, ui)
}
