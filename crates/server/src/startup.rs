use std::net::SocketAddr;

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(server: &ServerConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", server.host, server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}:{}: {e}", server.host, server.port)))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
    }
}

/// Build the app against an already validated configuration and run the HTTP server.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    runtime::ensure_env(&cfg.storage.upload_dir).await?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    runtime::ensure_schema(&db).await?;

    let state = ServerState::new(db);
    let app: Router = routes::build_router(state, build_cors());

    let addr = load_bind_addr(&cfg.server)?;
    info!(%addr, upload_dir = %cfg.storage.upload_dir, "starting quiz store");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!(event = "stop", "server stopped");
    Ok(())
}
