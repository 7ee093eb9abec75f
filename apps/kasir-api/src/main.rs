//! # Kasir API
//!
//! Binary entry point: configuration, database, HTTP server.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Load .env (optional) and initialize tracing                        │
//! │  2. KasirConfig::load()          ← environment                          │
//! │  3. Database::new()              ← pool + migrations                    │
//! │  4. AppState::from_database()                                          │
//! │  5. axum::serve(...)             ← until Ctrl+C / SIGTERM               │
//! │  6. Close the pool                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Context;
use tracing::{error, info};

use kasir_api::{build_app, init_tracing, AppState, KasirConfig};
use kasir_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    init_tracing();

    if let Ok(path) = dotenv {
        info!(path = %path.display(), "Loaded environment file");
    }

    let config = KasirConfig::load().context("Invalid configuration")?;
    info!(
        app = %config.app_name,
        version = %config.app_version,
        environment = %config.app_environment,
        "Starting Kasir API..."
    );

    let db = Database::new(config.database.clone())
        .await
        .with_context(|| format!("Failed to connect to {}", config.database.describe()))?;

    let state = AppState::from_database(&db, &config);
    let app = build_app(state, config.request_timeout);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(?e, "Failed to listen for Ctrl+C");
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
                error!(?e, "Failed to install SIGTERM handler");
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

    info!("Shutdown signal received");
}
