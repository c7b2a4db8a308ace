//! Server configuration

use shared::types::SearchMode;

/// Server configuration - every knob the service reads
///
/// # Environment variables
///
/// | Variable | Default | Purpose |
/// |----------|---------|---------|
/// | HTTP_PORT | 8080 | HTTP service port |
/// | DATABASE_URL | ws://localhost:8000 | document store endpoint (`mem://` for in-process) |
/// | DATABASE_NS | employee_management | store namespace |
/// | DATABASE_DB | main | store database |
/// | DATABASE_USER / DATABASE_PASS | unset | root credentials; signin is skipped when unset |
/// | SEARCH_MODE | union | multi-field search policy: union or intersect |
/// | ENVIRONMENT | development | development, staging or production |
/// | LOG_DIR | unset | directory for daily-rotated log files |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=9090 DATABASE_URL=ws://db.internal:8000 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API service port
    pub http_port: u16,
    /// Document store endpoint
    pub database_url: String,
    /// Store namespace
    pub database_ns: String,
    /// Store database inside the namespace
    pub database_db: String,
    /// Root username, optional
    pub database_user: Option<String>,
    /// Root password, optional
    pub database_pass: Option<String>,
    /// Multi-field search policy
    pub search_mode: SearchMode,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to the defaults above.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "ws://localhost:8000".into()),
            database_ns: std::env::var("DATABASE_NS")
                .unwrap_or_else(|_| "employee_management".into()),
            database_db: std::env::var("DATABASE_DB").unwrap_or_else(|_| "main".into()),
            database_user: std::env::var("DATABASE_USER").ok(),
            database_pass: std::env::var("DATABASE_PASS").ok(),
            search_mode: std::env::var("SEARCH_MODE")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or_default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
