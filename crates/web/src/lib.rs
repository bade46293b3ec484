//! HTTP surface of the dashboard: one page, a few JSON endpoints and the
//! bundled static assets.

pub mod api;
pub mod assets;
pub mod error;
pub mod page;
pub mod state;

use {
    axum::{Router, routing::get},
    mediascope_config::ServerConfig,
    tokio::net::TcpListener,
    tower_http::{compression::CompressionLayer, trace::TraceLayer},
    tracing::{info, warn},
};

pub use {
    error::{Result, WebError},
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/api/options", get(api::options))
        .route("/api/dashboard", get(api::dashboard))
        .route("/health", get(api::health))
        .route("/assets/{*path}", get(assets::asset))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `server.bind:server.port` and serve until Ctrl-C.
pub async fn serve(server: &ServerConfig, state: AppState) -> Result<()> {
    let addr = format!("{}:{}", server.bind, server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| WebError::Bind {
            addr: addr.clone(),
            source,
        })?;
    let local = listener.local_addr().map_err(WebError::Serve)?;

    info!(addr = %local, articles = state.corpus.len(), "dashboard listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(WebError::Serve)?;
    info!("dashboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
