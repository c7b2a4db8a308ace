//! Employee Server - employee records REST service
//!
//! # Architecture overview
//!
//! - **HTTP API** (`api`): axum routes and handlers for the employee
//!   surface plus a health check
//! - **Database** (`db`): remote SurrealDB document store, wire-to-store
//!   field translation and the employee repository
//! - **Core** (`core`): configuration, shared state, server lifecycle
//! - **Utilities** (`utils`): error envelope and logging
//!
//! # Module structure
//!
//! ```text
//! employee-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # store access layer
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use core::{AppState, Config, Server};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
