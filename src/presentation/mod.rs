//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the driver with infrastructure dependencies
//! - JSON output documents
//!
//! ## Structure
//!
//! - `cli` - Command-line definition
//! - `factory` - Creates the driver with the right process runner
//! - `output` - JSON documents

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, ColorWhen};
pub use factory::{create_driver, ConcreteDriver, DriverOptions};
