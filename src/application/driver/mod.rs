//! Driver Module
//!
//! Resolves target names and executes their command sequences.
//!
//! ## Structure
//!
//! - `result` - Result types (`ExecutionReport`, `StepReport`)
//! - `use_case` - Core use case logic (`Driver`)
//!
//! ## Usage
//!
//! ```ignore
//! use qdii_deploy::application::Driver;
//! use qdii_deploy::infrastructure::SystemRunner;
//!
//! let driver = Driver::new(SystemRunner::new(), config);
//! let plans = driver.resolve(&["build", "push"])?;
//! let report = driver.execute(&plans);
//! std::process::exit(report.exit_code);
//! ```

mod result;
mod use_case;

pub use result::{ExecutionReport, StepReport};
pub use use_case::Driver;
