//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Targets are positional words, like make goals, so an unknown target is
//!   reported by the driver rather than rejected by the parser
//! - Several targets may be named; they run in the order given

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    /// Whether to color, given what the terminal supports.
    pub fn enabled(self, detected: bool) -> bool {
        match self {
            ColorWhen::Auto => detected,
            ColorWhen::Always => true,
            ColorWhen::Never => false,
        }
    }
}

/// qdii-deploy - run, build, push and pull the QDII data dashboard
#[derive(Parser, Debug)]
#[command(name = "qdii-deploy")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Targets: run, build, push, pull. Use --list to see their commands.")]
pub struct Cli {
    /// Targets to run, in order
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// List targets and the commands they run
    #[arg(short, long)]
    pub list: bool,

    /// Print commands without executing them
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Output format for CI
    #[arg(long)]
    pub json: bool,

    /// Settings file (default: ./qdii-deploy.toml, then the user config)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_arguments() {
        let cli = Cli::try_parse_from(["qdii-deploy"]).unwrap();
        assert!(cli.targets.is_empty());
        assert!(!cli.list);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_cli_parse_single_target() {
        let cli = Cli::try_parse_from(["qdii-deploy", "build"]).unwrap();
        assert_eq!(cli.targets, vec!["build"]);
    }

    #[test]
    fn test_cli_parse_multiple_targets_keep_order() {
        let cli = Cli::try_parse_from(["qdii-deploy", "pull", "run"]).unwrap();
        assert_eq!(cli.targets, vec!["pull", "run"]);
    }

    #[test]
    fn test_cli_unknown_target_is_accepted_by_parser() {
        let cli = Cli::try_parse_from(["qdii-deploy", "deploy"]).unwrap();
        assert_eq!(cli.targets, vec!["deploy"]);
    }

    #[test]
    fn test_cli_parse_dry_run_short_flag() {
        let cli = Cli::try_parse_from(["qdii-deploy", "-n", "push"]).unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.targets, vec!["push"]);
    }

    #[test]
    fn test_cli_parse_flags_after_target() {
        let cli = Cli::try_parse_from(["qdii-deploy", "pull", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_parse_color_and_config() {
        let cli = Cli::try_parse_from([
            "qdii-deploy",
            "--color",
            "never",
            "--config",
            "ops/qdii.toml",
            "--list",
        ])
        .unwrap();
        assert_eq!(cli.color, Some(ColorWhen::Never));
        assert_eq!(cli.config, Some(PathBuf::from("ops/qdii.toml")));
        assert!(cli.list);
    }

    #[test]
    fn test_color_when_enabled() {
        assert!(ColorWhen::Auto.enabled(true));
        assert!(!ColorWhen::Auto.enabled(false));
        assert!(ColorWhen::Always.enabled(false));
        assert!(!ColorWhen::Never.enabled(true));
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["qdii-deploy", "--force", "build"]).is_err());
    }
}
