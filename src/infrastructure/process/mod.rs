//! Process Runners
//!
//! Implementations of the `ProcessRunner` port.

mod recording;
mod system;

pub use recording::RecordingRunner;
pub use system::{StdoutMode, SystemRunner};
