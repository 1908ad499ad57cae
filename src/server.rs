// ABOUTME: HTTP server assembly for the permission service
// ABOUTME: Merges route groups, applies middleware layers and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

//! # Access Server
//!
//! Layer order, outermost first: request span, request ID, timeout, body limit.
//! The request ID middleware records into the span opened by the trace layer,
//! so the trace layer must wrap it.

use crate::middleware::{request_id_middleware, request_timeout_middleware, RequestTrace};
use crate::resources::ServerResources;
use crate::routes::{AccessRoutes, HealthRoutes};
use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, middleware, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Permission service HTTP server
pub struct AccessServer {
    resources: Arc<ServerResources>,
}

impl AccessServer {
    /// Create a server over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the complete router with middleware applied
    #[must_use]
    pub fn router(&self) -> Router {
        let http = &self.resources.config.http;

        Router::new()
            .merge(AccessRoutes::routes(Arc::clone(&self.resources)))
            .merge(HealthRoutes::routes(Arc::clone(&self.resources)))
            .layer(DefaultBodyLimit::max(http.max_body_bytes))
            .layer(middleware::from_fn_with_state(
                http.request_timeout,
                request_timeout_middleware,
            ))
            .layer(middleware::from_fn(request_id_middleware))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(RequestTrace)
                    .on_response(RequestTrace),
            )
    }

    /// Bind the configured address and serve until SIGINT or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or the server fails
    pub async fn run(self) -> Result<()> {
        let address = self.resources.config.bind_address();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("Failed to bind {address}"))?;

        info!(address = %address, "HTTP server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server failed")?;

        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received, shutting down server gracefully");
}
