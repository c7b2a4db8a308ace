//! Application state

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared application state, handed to every handler through axum `State`
///
/// Cloning is cheap; the store handle is reference-counted internally and
/// safe to use from concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Config,
    /// Document store handle
    pub db: Surreal<Any>,
}

impl AppState {
    /// Connect the store and assemble the shared state
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_service = DbService::connect(config).await?;
        Ok(Self {
            config: config.clone(),
            db: db_service.db,
        })
    }
}
