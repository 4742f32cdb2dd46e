//! Configuration type definitions
//!
//! Every field defaults to the literal value the targets were written with,
//! so an empty or missing file reproduces the fixed command lines.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DriverResult;

use super::loader::{self, ConfigWarning};

/// Dashboard serving settings (`run` target)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_entry")]
    pub entry: String,

    #[serde(default = "default_env_name")]
    pub env_name: String,

    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_env_manager")]
    pub env_manager: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            entry: default_entry(),
            env_name: default_env_name(),
            server: default_server(),
            env_manager: default_env_manager(),
        }
    }
}

/// Container image settings (`build`, `push`, `pull` targets)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageConfig {
    #[serde(default = "default_image_name")]
    pub name: String,

    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_tag")]
    pub tag: String,

    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,

    #[serde(default = "default_context")]
    pub context: String,

    #[serde(default = "default_engine")]
    pub engine: String,
}

impl ImageConfig {
    /// Registry-qualified reference, e.g. `kegao1995/qdii_data:latest`
    pub fn published_reference(&self) -> String {
        if self.namespace.is_empty() {
            format!("{}:{}", self.name, self.tag)
        } else {
            format!("{}/{}:{}", self.namespace, self.name, self.tag)
        }
    }

    /// Comma-joined platform list for `--platform`
    pub fn platform_list(&self) -> String {
        self.platforms.join(",")
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            name: default_image_name(),
            namespace: default_namespace(),
            tag: default_tag(),
            platforms: default_platforms(),
            context: default_context(),
            engine: default_engine(),
        }
    }
}

fn default_port() -> u16 {
    8501
}

fn default_entry() -> String {
    "src/pages/Index.py".to_string()
}

fn default_env_name() -> String {
    "qdii".to_string()
}

fn default_server() -> String {
    "streamlit".to_string()
}

fn default_env_manager() -> String {
    "conda".to_string()
}

fn default_image_name() -> String {
    "qdii_data".to_string()
}

fn default_namespace() -> String {
    "kegao1995".to_string()
}

fn default_tag() -> String {
    "latest".to_string()
}

fn default_platforms() -> Vec<String> {
    vec!["linux/amd64".to_string(), "linux/arm64".to_string()]
}

fn default_context() -> String {
    ".".to_string()
}

fn default_engine() -> String {
    "docker".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub image: ImageConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> DriverResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> DriverResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Parse configuration from TOML text (unknown keys are ignored)
    pub fn from_toml(content: &str) -> DriverResult<Self> {
        loader::parse_with_warnings(content, Path::new("<inline>")).map(|(config, _)| config)
    }

    /// Apply environment variable overrides (QDII_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
