//! Data models
//!
//! Shared between employee-server and API consumers (via JSON).

pub mod employee;

// Re-exports
pub use employee::*;
