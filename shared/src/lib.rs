//! Fitness Planner Shared Library
//!
//! This crate contains the request/response types and validation helpers
//! shared between the API client and any embedding application.

pub mod types;
pub mod validation;

// Re-export commonly used items
pub use types::*;
pub use validation::parse_plan_id;
