use actix_web::HttpServer;
use anyhow::Context;
use tracing::info;
use tracing_actix_web::TracingLogger;

use rt_api::app::{create_app, resource_paths, AppState};
use rt_api::telemetry::init_tracing;
use rt_infra::DatabasePool;
use rt_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load configuration")?;
    init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting RentTracker API Server");

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to open database")?;
    pool.ensure_schema()
        .await
        .context("failed to create database schema")?;

    let state = AppState::new(pool.clone(), &config).context("failed to build services")?;

    for (path, name) in resource_paths() {
        info!(path, resource = name, "Registered resource routes");
    }

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server =
        HttpServer::new(move || create_app(state.clone()).wrap(TracingLogger::default()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {bind_address}"))?
        .run()
        .await
        .context("server terminated with an error")?;

    info!("Server stopped, closing database pool");
    pool.close().await;
    Ok(())
}
