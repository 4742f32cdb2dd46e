//! Event Sink Implementations
//!
//! Provides concrete implementations of DriverEventSink:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human-readable command echo lives with the binary's UI.

mod json;

pub use json::JsonEventSink;
