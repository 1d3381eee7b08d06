use delivery_server::{Config, Server, ServerState, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (.env is optional)
    dotenv::dotenv().ok();

    // 2. Configuration
    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    // 3. Logging (daily-rolling file under work_dir/logs)
    let log_dir = config.log_dir();
    init_logger_with_file(Some(&config.log_level), log_dir.to_str());

    tracing::info!("Delivery server starting...");

    // 4. State and server
    let state = ServerState::initialize(&config).await?;
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
