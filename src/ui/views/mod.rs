pub mod report;
pub mod targets;
