//! Domain Entities
//!
//! Steps and the target plans that group them.

mod plan;
mod step;

pub use plan::TargetPlan;
pub use step::Step;
