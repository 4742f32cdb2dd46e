//! Command handlers for the binary

pub mod execute;
pub mod list;
