use std::path::Path;

use tracing_subscriber::EnvFilter;

use swasthya_api::config::load_env_file;
use swasthya_api::{AppState, Config};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Read before the subscriber so `.env` can set RUST_LOG.
    let env_file = load_env_file(Path::new(".env"));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    if let Err(e) = env_file {
        tracing::warn!(error = %e, "failed to load .env file");
    }

    let config = Config::from_env()?;
    let state = AppState::from_config(&config)?;
    let app = swasthya_api::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        data_dir = %config.data_dir.display(),
        live_facilities = config.overpass_url.is_some(),
        "swasthya api listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
