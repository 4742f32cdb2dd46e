//! qdii-deploy - deployment driver for the QDII data dashboard
//!
//! Exposes four named targets, each a fixed sequence of external tool
//! invocations: `run` serves the dashboard locally, `build` builds the
//! container image, `push` publishes a multi-platform image, and `pull`
//! fetches the published image and starts it detached.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Driver, ExecutionReport, StepReport};
pub use config::Config;
pub use domain::entities::{Step, TargetPlan};
pub use domain::services::{plan, plan_all};
pub use domain::value_objects::TargetName;
pub use error::{DriverError, DriverResult};
