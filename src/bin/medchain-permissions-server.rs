// ABOUTME: Server binary for the Medchain permission service
// ABOUTME: Loads configuration, opens the permission store and serves the HTTP API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

//! # Medchain Permissions Server Binary
//!
//! Starts the grant/revoke HTTP API backed by the configured permission store.

use anyhow::Result;
use clap::Parser;
use medchain_permissions::{
    config::{DatabaseUrl, ServerConfig},
    database::create_permission_store,
    logging,
    resources::ServerResources,
    server::AccessServer,
};
use std::sync::Arc;
use tracing::{error, info};

/// Command-line overrides applied on top of environment configuration
#[derive(Parser)]
#[command(name = "medchain-permissions-server")]
#[command(about = "Medchain Permissions - grant and revoke resource access over HTTP")]
struct Args {
    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override permission store location (`sqlite:<path>`, `sqlite::memory:` or `memory`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url)?;
    }

    logging::init_for_server(&config)?;

    info!("Starting Medchain Permissions");
    info!("{}", config.summary());

    let store = create_permission_store(&config.database).await?;
    info!("Permission store initialized: {}", store.backend_name());

    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(store, Arc::new(config)));
    if let Err(e) = AccessServer::new(resources).run().await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let host = &config.host;
    let port = config.http_port;

    info!("=== Available API Endpoints ===");
    info!("Access Management:");
    info!("   Grant Access:      POST http://{host}:{port}/grant/");
    info!("   Revoke Access:     POST http://{host}:{port}/revoke/");
    info!("Monitoring:");
    info!("   Health Check:      GET  http://{host}:{port}/health");
    info!("   Readiness:         GET  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
