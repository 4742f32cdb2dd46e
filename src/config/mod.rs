//! Configuration module for qdii-deploy
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (QDII_*)
//! 3. Project config (./qdii-deploy.toml)
//! 4. User config (~/.config/qdii-deploy/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_layered, user_config_path, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE,
};
pub use types::{Config, DashboardConfig, ImageConfig};
