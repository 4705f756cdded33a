use pricing_server::{Config, Server, ServerState, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger(Some(&config.log_level), config.log_dir.as_deref());

    tracing::info!("Restaurant pricing service starting...");

    // 2. Initialize state (catalog client, calculators)
    let state = ServerState::initialize(&config);

    // 3. Run the HTTP server until ctrl-c
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
