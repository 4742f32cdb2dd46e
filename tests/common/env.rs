//! Test environment builder for isolated qdii-deploy runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Environment variables that would leak settings from the host.
const HOST_OVERRIDES: &[&str] = &[
    "QDII_PORT",
    "QDII_ENV_NAME",
    "QDII_IMAGE",
    "QDII_REGISTRY_NAMESPACE",
    "QDII_TAG",
    "QDII_PLATFORMS",
    "QDII_ENGINE",
    "QDII_LOG_FORMAT",
    "RUST_LOG",
    "GITHUB_ACTIONS",
];

/// Result of running the qdii-deploy binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn stdout_lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// Parse every stdout line as one JSON document
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("stdout line is not JSON ({e}): {l}"))
            })
            .collect()
    }
}

/// Isolated working directory plus an empty config home.
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            project_root: TempDir::new().expect("create project dir"),
            config_home: TempDir::new().expect("create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_qdii-deploy")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) -> PathBuf {
        write_file(&self.project_path(relative), content)
    }

    /// Write the user-level settings file (`$XDG_CONFIG_HOME/qdii-deploy/config.toml`)
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        let path = self
            .config_home
            .path()
            .join("qdii-deploy")
            .join("config.toml");
        write_file(&path, content)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        for (key, value) in env_vars {
            cmd.env(key, value);
        }
        to_result(cmd.output().expect("failed to execute qdii-deploy"))
    }

    /// Command with the isolation applied, for tests that need to tweak it.
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb");
        for key in HOST_OVERRIDES {
            cmd.env_remove(key);
        }
        cmd
    }
}

pub fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn write_file(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create directories");
    }
    std::fs::write(path, content).expect("write file");
    path.to_path_buf()
}
