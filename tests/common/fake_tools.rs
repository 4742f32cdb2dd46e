//! Stand-in programs for the tools the targets wrap.
//!
//! Each fake appends `<program> <args>` to a log file and prints a line on
//! stdout. It exits with `FAKE_FAIL_CODE` when its first argument equals
//! `FAKE_FAIL_ON`, and 0 otherwise. When its first argument equals
//! `FAKE_INTERRUPT_ON` it sends SIGINT to the driver, as a terminal Ctrl+C
//! would, and then still exits 0.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

const SCRIPT: &str = r#"#!/bin/sh
echo "${0##*/} $*" >> "$FAKE_TOOLS_LOG"
echo "fake ${0##*/} output"
if [ -n "$FAKE_INTERRUPT_ON" ] && [ "$1" = "$FAKE_INTERRUPT_ON" ]; then
  kill -INT "$PPID"
  # Give the driver's handler thread time to observe the signal.
  i=0
  while [ "$i" -lt 50000 ]; do i=$((i + 1)); done
fi
if [ -n "$FAKE_FAIL_ON" ] && [ "$1" = "$FAKE_FAIL_ON" ]; then
  exit "$FAKE_FAIL_CODE"
fi
exit 0
"#;

pub struct FakeTools {
    pub bin_dir: TempDir,
    pub log: PathBuf,
}

impl FakeTools {
    /// Install fakes for `programs` into a fresh directory.
    pub fn install(programs: &[&str]) -> Self {
        let bin_dir = TempDir::new().expect("create fake bin dir");
        for program in programs {
            write_executable(&bin_dir.path().join(program));
        }
        let log = bin_dir.path().join("invocations.log");
        Self { bin_dir, log }
    }

    /// Environment for a run that sees only the fakes on PATH.
    pub fn env(&self) -> Vec<(&'static str, String)> {
        vec![
            ("PATH", self.bin_dir.path().display().to_string()),
            ("FAKE_TOOLS_LOG", self.log.display().to_string()),
        ]
    }

    /// Invocations recorded so far, one per line
    pub fn invocations(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

fn write_executable(path: &Path) {
    std::fs::write(path, SCRIPT).expect("write fake tool");
    let mut perms = std::fs::metadata(path).expect("stat fake tool").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("chmod fake tool");
}
