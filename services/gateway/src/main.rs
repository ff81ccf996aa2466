mod config;
mod error;
mod fetcher;
mod handlers;
mod models;
mod router;
mod state;
mod upstream;

use anyhow::Context;
use config::GatewayConfig;
use router::create_router;
use state::AppState;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting option live-data gateway");

    let config = GatewayConfig::from_env().context("Invalid gateway configuration")?;
    tracing::info!(
        upstream = %config.upstream.base_url,
        max_attempts = config.upstream.max_attempts,
        timeout_secs = config.upstream.timeout.as_secs(),
        max_connections = config.upstream.max_connections,
        "Loaded configuration"
    );

    // One pool for the whole process, dropped with the router on shutdown
    let state = AppState::from_config(&config.upstream)
        .context("Failed to build upstream HTTP client")?;

    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Gateway stopped, upstream pool released");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received shutdown signal");
}
