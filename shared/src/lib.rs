//! Shared types for the employee management service
//!
//! The wire contract lives here: the Employee record schema, the typed
//! partial-update payload, and cross-layer policy types.

pub mod models;
pub mod types;

// Re-exports
pub use models::{Employee, EmployeePatch};
pub use types::SearchMode;
