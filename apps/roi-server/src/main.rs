//! # ROI Calculator Server
//!
//! Serves the JSON API and the static front end.
//!
//! ## Startup
//! ```text
//! init_tracing ──► ServerConfig::load ──► Database::new ──► reports dir
//!      ──► build_router ──► axum::serve (until Ctrl+C / SIGTERM)
//! ```

use anyhow::Context;
use roi_db::{Database, DbConfig};
use roi_report::ReportStore;
use roi_server::{build_router, init_tracing, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting ROI calculator server...");

    let config = ServerConfig::load()?;
    info!(
        addr = %config.bind_address(),
        database = %config.database_path.display(),
        public = %config.public_dir.display(),
        "Configuration loaded"
    );

    let db_config = DbConfig::new(&config.database_path).max_connections(config.db_max_connections);
    let db = Database::new(db_config)
        .await
        .context("failed to open scenario store")?;

    let reports = ReportStore::new(&config.reports_dir);
    reports
        .ensure_dir()
        .await
        .with_context(|| format!("failed to create {}", config.reports_dir.display()))?;

    let app = build_router(AppState::new(db.clone(), reports), &config.public_dir);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_address()))?;
    info!(addr = %config.bind_address(), "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
