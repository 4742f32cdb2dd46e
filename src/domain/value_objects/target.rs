//! Target name value object - the four named automation actions

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DriverError;

/// Named target exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetName {
    /// Serve the dashboard locally
    Run,
    /// Build the local container image
    Build,
    /// Log in and publish a multi-arch image
    Push,
    /// Fetch the published image and start it detached
    Pull,
}

impl TargetName {
    /// All targets in catalogue order
    pub const ALL: [TargetName; 4] = [
        TargetName::Run,
        TargetName::Build,
        TargetName::Push,
        TargetName::Pull,
    ];

    /// The word used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetName::Run => "run",
            TargetName::Build => "build",
            TargetName::Push => "push",
            TargetName::Pull => "pull",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            TargetName::Run => "Serve the dashboard in the named environment (foreground)",
            TargetName::Build => "Build the container image from the current directory",
            TargetName::Push => "Log in to the registry and push a multi-platform image",
            TargetName::Pull => "Pull the published image and run it detached",
        }
    }
}

impl std::fmt::Display for TargetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetName {
    type Err = DriverError;

    /// Target words are matched exactly, like make goals.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetName::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| DriverError::TargetNotFound {
                name: s.to_string(),
            })
    }
}
