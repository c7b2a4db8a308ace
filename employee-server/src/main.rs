use employee_server::{AppState, Config, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load .env so LOG_DIR and the config see a complete environment
    let _ = dotenvy::dotenv();

    // 2. Set up logging
    let log_dir = std::env::var("LOG_DIR").ok();
    employee_server::init_logger_with_file(log_dir.as_deref());

    // 3. Load configuration
    let config = Config::from_env();
    tracing::info!(
        environment = %config.environment,
        search_mode = %config.search_mode,
        "Employee server starting"
    );

    // 4. Connect the store and build shared state
    let state = AppState::initialize(&config).await?;

    // 5. Serve the API
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
