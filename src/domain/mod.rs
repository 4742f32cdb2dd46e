//! Domain Layer
//!
//! The core of qdii-deploy - target definitions without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Steps and target plans
//! - `value_objects/` - Target names
//! - `services/` - The planner mapping targets to command sequences
//! - `ports/` - Interfaces for process execution and event reporting
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes directly
//! 2. **Pure Functions** - Planning is deterministic for a given config
//! 3. **Ports & Adapters** - Execution goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
