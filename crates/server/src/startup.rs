use std::net::SocketAddr;
use std::path::Path;

use configs::{AppConfig, ServerConfig};
use migration::MigratorTrait;
use models::db::{connect_with_config, test_connection, DatabaseConfig};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Config file when one exists (it must then be valid), otherwise the
/// `SERVER_HOST` / `SERVER_PORT` / `DATABASE_URL` environment.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        return AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()));
    }
    info!(%path, "no config file; reading settings from environment");
    AppConfig::from_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only on process exit");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: connect the store, migrate, build the app and serve until Ctrl+C
pub async fn run() -> anyhow::Result<()> {
    let cfg = load_config()?;

    let db = connect_with_config(&DatabaseConfig::from(&cfg.database)).await?;
    test_connection(&db).await?;
    migration::Migrator::up(&db, None).await?;
    info!("schema up to date");

    let app = routes::build_router(ServerState::new(db), build_cors());

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, "starting movies api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
