//! HCM Engine API Server binary

use std::net::SocketAddr;

use anyhow::Context;

use hcm_core::LearnedModel;
use hcm_server::config::{Config, LogFormat};
use hcm_server::{create_router, telemetry, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Initialize logging
    telemetry::init_tracing(LogFormat::from_env());

    // Load configuration
    let config = Config::from_env();

    tracing::info!("HCM Engine server starting ({})...", config.environment);
    tracing::info!(
        "Default thresholds: theta_a={} theta_I={}",
        config.theta_a, config.theta_i
    );

    // Resolve the learned model once; failure only disables learned mode
    let learned = LearnedModel::load(config.model_path.as_deref(), config.learned_cutoff);
    if let Some(reason) = learned.unavailable_reason() {
        tracing::info!("Learned mode disabled: {}", reason);
    }

    let state = AppState::new(config.clone(), learned);
    let app = create_router(state);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
