//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod hierarchy;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use hierarchy::{example_division, parse_hierarchy, to_hierarchy_toml, UnitSpec};
