//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all process I/O.
//!
//! ## Structure
//!
//! - `process/` - Process runners (System, Recording)
//! - `events/` - Event sinks (JSON)

pub mod events;
pub mod process;

// Re-export for convenience
pub use events::JsonEventSink;
pub use process::{RecordingRunner, StdoutMode, SystemRunner};
