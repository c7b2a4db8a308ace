//! Core module - configuration, state and server lifecycle
//!
//! # Contents
//!
//! - [`Config`] - environment-driven server configuration
//! - [`AppState`] - shared state threaded through handlers
//! - [`Server`] - HTTP server startup and shutdown

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::AppState;
