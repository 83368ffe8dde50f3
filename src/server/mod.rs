//! HTTP boundary: router, listener, shutdown.
//!
//! One tokio task serves each connection; every request task gets a clone of
//! [`AppState`], which is just the shared lookup handle plus the error
//! policy. No mutable state lives here.

pub mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::post;

use crate::error::Result;
use crate::lookup::Lookup;

/// Shared per-request state.
#[derive(Clone)]
pub struct AppState {
    /// Lookup backend, constructed once at startup. Implementations are
    /// required to be safe for concurrent use.
    pub lookup: Arc<dyn Lookup>,
    /// Reproduce the legacy contract of answering 200 with a zero-valued
    /// body when the lookup backend fails.
    pub mask_lookup_errors: bool,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", post(handlers::search))
        .route("/hydrate", post(handlers::hydrate))
        .with_state(state)
}

/// Bind the listener and serve until SIGINT, then drain.
pub async fn run(state: AppState, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received, draining requests"),
        Err(e) => tracing::error!("failed to install shutdown handler: {e}"),
    }
}
