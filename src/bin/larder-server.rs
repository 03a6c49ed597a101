// ABOUTME: Server binary for the Larder recipe API
// ABOUTME: Loads configuration, opens the database, and serves the axum router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Kitchen

//! # Larder Server Binary
//!
//! ```bash
//! cargo run --bin larder-server
//! cargo run --bin larder-server -- --http-port 9000 --database-url sqlite::memory:
//! ```

use anyhow::Result;
use clap::Parser;
use larder_server::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    logging,
    resources::ServerResources,
    routes::build_router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "larder-server")]
#[command(about = "Larder - recipe discovery and social cooking REST API")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(url)?;
    }

    logging::init_from_env()?;

    info!("Starting Larder server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    let http_port = config.http_port;

    let resources = Arc::new(ServerResources::new(database.clone(), config));
    let app = build_router(resources);

    let addr = SocketAddr::from(([0, 0, 0, 0], http_port));
    let listener = TcpListener::bind(addr).await?;
    display_available_endpoints(http_port);
    info!("Listening on http://{addr}");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        return Err(e.into());
    }

    database.close().await;
    info!("Larder server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received, draining connections");
}

/// Log the endpoint list at startup
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(port: u16) {
    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());

    info!("=== Available API Endpoints ===");
    info!("   Health:            GET  http://{host}:{port}/health");
    info!("   Recipes:           GET  http://{host}:{port}/api/recipes?searchQuery=&meal=&cuisine=&diet=&time=");
    info!("   Recipe:            GET  http://{host}:{port}/api/recipes/{{id}}");
    info!("   Seasonal:          GET  http://{host}:{port}/api/recipes/seasonal");
    info!("   Users:             POST http://{host}:{port}/api/users");
    info!("   Saved Recipes:     POST http://{host}:{port}/api/users/{{id}}/saved-recipes");
    info!("   Posts:             GET  http://{host}:{port}/api/posts");
    info!("=== End of Endpoint List ===");
}
