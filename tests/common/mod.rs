//! Common test utilities for qdii-deploy CLI tests.
//!
//! - `TestEnv`: isolated working directory and config home
//! - `FakeEngine`: stand-in `docker`/`conda` programs on a private PATH (Unix)

#![allow(dead_code)]

pub mod env;
#[cfg(unix)]
pub mod fake_tools;

pub use env::*;
