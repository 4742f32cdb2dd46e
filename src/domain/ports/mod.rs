//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod driver_events;
pub mod process_runner;

pub use driver_events::{DriverEvent, DriverEventSink, NoopEventSink};
pub use process_runner::{ProcessRunner, StepExit};
