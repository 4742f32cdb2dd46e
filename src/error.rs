//! Error types for qdii-deploy
//!
//! Uses `thiserror` for library errors. Failures of the wrapped tools are not
//! errors here: they surface as exit codes in the execution report.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::TargetName;

/// Result type alias for driver operations
pub type DriverResult<T> = Result<T, DriverError>;

/// Exit code for driver-level usage errors (unknown target, bad config)
pub const EXIT_USAGE: i32 = 2;

/// Exit code when the program could not be found (shell convention)
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code when the program exists but could not be started
pub const EXIT_CANNOT_EXECUTE: i32 = 126;

/// Exit code after Ctrl+C stopped the remaining steps (128 + SIGINT)
pub const EXIT_INTERRUPTED: i32 = 130;

/// Main error type for driver operations
#[derive(Error, Debug)]
pub enum DriverError {
    /// Requested target is not one of the known targets
    #[error("no rule to make target '{name}' (known targets: {})", known_targets())]
    TargetNotFound { name: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A step's program could not be started
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriverError {
    /// Process exit code that represents this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Spawn { source, .. } => match source.kind() {
                std::io::ErrorKind::NotFound => EXIT_NOT_FOUND,
                _ => EXIT_CANNOT_EXECUTE,
            },
            DriverError::TargetNotFound { .. } | DriverError::InvalidConfig { .. } => EXIT_USAGE,
            DriverError::Io(_) => 1,
        }
    }

    /// File associated with this error, if any.
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            DriverError::InvalidConfig { file, .. } => Some(file.as_path()),
            _ => None,
        }
    }
}

fn known_targets() -> String {
    TargetName::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
