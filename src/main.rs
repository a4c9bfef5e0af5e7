//! Service entrypoint.
//!
//! Wires configuration, the MySQL pool, the demo service and the HTTP
//! router. Failures here (config, pool, bind) terminate the process before
//! any traffic is served.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use axum_template::adapters::http::api_router;
use axum_template::adapters::mysql::{connect, MySqlDemoRepository};
use axum_template::application::DemoService;
use axum_template::config::AppSettings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = AppSettings::load()?;
    settings.validate()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.server.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(
        name = %settings.server.name,
        environment = ?settings.server.environment,
        "starting"
    );

    let pool = connect(&settings.database).await?;
    tracing::info!("database pool ready");

    let repository = Arc::new(MySqlDemoRepository::new(pool.clone()));
    let service = Arc::new(DemoService::new(repository));
    let app = api_router(service, &settings.server);

    let addr = settings.server.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    pool.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    tracing::info!("shutdown signal received");
}
