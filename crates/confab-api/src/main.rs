//! Confab gateway entry point.
//!
//! Binary name: `confab`
//!
//! Loads configuration from `confab.toml` and `CONFAB_*`/`PORT` overrides,
//! wires the dispatcher, starts the session sweeper, then serves the
//! WebSocket endpoint until Ctrl+C or SIGTERM.

use anyhow::Context;
use tokio_util::sync::CancellationToken;

use confab_api::http::router::build_router;
use confab_api::state::AppState;
use confab_core::session::sweeper::spawn_sweeper;
use confab_infra::config::load_gateway_config;
use confab_observe::tracing_setup::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = load_gateway_config().await?;
    let config = loaded.config.clone();

    init_tracing(config.log_format, config.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;
    loaded.log_fallback();

    let state = AppState::init(config.clone()).await?;

    let cancel = CancellationToken::new();
    let sweeper = spawn_sweeper(state.sweep_targets(), config.sweep_interval(), cancel.clone());

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local_addr = listener.local_addr()?;

    tracing::info!(%local_addr, ws_path = %config.ws_path, "Gateway listening");
    println!(
        "  {} Confab gateway listening on {}",
        console::style("⚡").bold(),
        console::style(format!("ws://{local_addr}{}", config.ws_path)).cyan()
    );
    println!("  {}", console::style("Press Ctrl+C to stop").dim());

    let router = build_router(state);

    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    cancel.cancel();
    if let Err(err) = sweeper.await {
        tracing::warn!(error = %err, "Session sweeper task failed");
    }

    println!("\n  Server stopped.");
    shutdown_tracing();

    served.context("server error")
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received");
}
