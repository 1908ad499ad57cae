// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Builds server resources and routers over an in-memory permission store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `medchain_permissions`

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use medchain_permissions::{
    config::ServerConfig,
    database::{InMemoryPermissionStore, PermissionStore},
    resources::ServerResources,
    server::AccessServer,
};
use serde_json::Value;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Actor header value used by the request helpers
pub const TEST_ACTOR: &str = "admin:alice";

/// Initialize quiet test logging once per test binary
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Server resources over a fresh in-memory store with default configuration
pub fn create_test_resources() -> Arc<ServerResources> {
    create_test_resources_with(Arc::new(InMemoryPermissionStore::new()))
}

/// Server resources over the given store with default configuration
pub fn create_test_resources_with(store: Arc<dyn PermissionStore>) -> Arc<ServerResources> {
    create_test_resources_with_config(store, ServerConfig::default())
}

/// Server resources over the given store and configuration
pub fn create_test_resources_with_config(
    store: Arc<dyn PermissionStore>,
    config: ServerConfig,
) -> Arc<ServerResources> {
    init_test_logging();
    Arc::new(ServerResources::new(store, Arc::new(config)))
}

/// Fully layered router, as served by the binary
pub fn create_test_router(resources: &Arc<ServerResources>) -> Router {
    AccessServer::new(Arc::clone(resources)).router()
}

/// `POST` a JSON body as `TEST_ACTOR`
pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-actor-id", TEST_ACTOR)
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// `POST` raw bytes as `TEST_ACTOR`
pub fn post_raw(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-actor-id", TEST_ACTOR)
        .body(Body::from(body))
        .unwrap()
}

/// Read a response body as JSON
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
