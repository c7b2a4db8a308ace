//! Store-side models
//!
//! Document shapes and the wire-to-store field translation.

pub mod employee;

pub use employee::*;
