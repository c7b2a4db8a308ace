//! Database Module
//!
//! Handles the SurrealDB connection and employee document access

pub mod models;
pub mod repository;

use crate::core::Config;
use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

/// Database service — owns the document store handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect to the document store and select namespace and database
    ///
    /// The endpoint scheme picks the engine: `ws://` reaches a remote
    /// server, `mem://` runs in-process. Root signin only happens when
    /// credentials are configured; the in-memory engine has none.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let db = any::connect(config.database_url.as_str()).await.map_err(|e| {
            AppError::database(format!(
                "Failed to connect to {}: {e}",
                config.database_url
            ))
        })?;

        if let (Some(user), Some(pass)) = (&config.database_user, &config.database_pass) {
            db.signin(Root {
                username: user.as_str(),
                password: pass.as_str(),
            })
            .await
            .map_err(|e| AppError::database(format!("Signin failed: {e}")))?;
        }

        db.use_ns(&config.database_ns)
            .use_db(&config.database_db)
            .await
            .map_err(|e| {
                AppError::database(format!(
                    "Failed to select {}/{}: {e}",
                    config.database_ns, config.database_db
                ))
            })?;

        tracing::info!(
            url = %config.database_url,
            ns = %config.database_ns,
            db = %config.database_db,
            "Database connection established"
        );

        Ok(Self { db })
    }
}
