//! HTTP server for the search engine
//!
//! Architecture:
//! - `GET /search?q=&p=` runs one search and renders it as JSON or as htmx
//!   fragments depending on the `HX-Request` header
//! - `GET /health` answers `ok`
//! - every other path is served from the static asset directory
//!
//! The engine is built once before the listener is bound and handed to the
//! router as shared, read-only state.

mod handlers;

use crate::query::SearchEngine;
use crate::utils::AppConfig;
use anyhow::{Context, Result};
use axum::{Router, routing::get};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub use handlers::SearchParams;

/// Build the application router
pub fn router(engine: Arc<SearchEngine>, static_dir: &Path) -> Router {
    Router::new()
        .route("/search", get(handlers::search))
        .route("/health", get(handlers::health))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

/// Bind the configured port and serve until Ctrl+C
pub async fn serve(engine: Arc<SearchEngine>, config: &AppConfig) -> Result<()> {
    let app = router(engine, &config.static_dir);

    let bind_addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_addr))?;

    tracing::info!("versefind available at http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
