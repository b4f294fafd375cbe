use std::sync::Arc;

use threadwise_api::{app::build_router, config::Config, logging::init_logging, state::AppState};
use threadwise_llm::create_model;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config.logging);

    tracing::info!("Starting Threadwise AI service");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    tracing::info!(model = %config.llm.model, timeout_secs = config.llm.timeout_secs, "Initializing Gemini client");
    let model = create_model(&config.gemini_config())?;

    let state = Arc::new(AppState::new(config.clone(), model));
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("API docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
