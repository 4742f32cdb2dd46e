//! Domain Services
//!
//! Stateless logic that turns configuration into target plans.

pub mod planner;

pub use planner::{plan, plan_all};
