//! HTTP server for revgeod
//!
//! Binds the configured address and serves the query router.

pub mod routes;
pub mod state;

use crate::config::Config;
use crate::error::Result;
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the HTTP server
///
/// Builds the shared state (loading the geocoder dataset), binds the
/// configured address, and serves until SIGINT/SIGTERM.
pub async fn run(config: Config) -> Result<()> {
    let addr = config.server_addr();

    let state = Arc::new(AppState::new(config));
    let app = create_router(state);

    info!("Starting server on {}", addr);

    // Bind by string so hostnames resolve, not just socket addresses.
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| crate::error::Error::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    // Connect-info is required: the logging middleware reports the peer.
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| crate::error::Error::Server(format!("Server error: {}", e)))?;

    Ok(())
}

/// Resolve on SIGINT or SIGTERM (the latter for container runtimes)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        if let Ok(mut sig) = signal(SignalKind::terminate()) {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
