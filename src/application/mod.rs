//! Application Layer
//!
//! Use cases that orchestrate the flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain target definitions (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `Driver` - Resolves target names and executes their steps

pub mod driver;

pub use driver::{Driver, ExecutionReport, StepReport};
