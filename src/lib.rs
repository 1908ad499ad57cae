// ABOUTME: Main library entry point for the Medchain permission service
// ABOUTME: Grants and revokes subject access to resources over HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

#![deny(unsafe_code)]

//! # Medchain Permissions
//!
//! An HTTP service recording which subject may access which resource.
//! Two endpoints mutate the permission set:
//!
//! - `POST /grant/` records a new permission and returns it (`201`)
//! - `POST /revoke/` removes an existing permission and returns it (`200`)
//!
//! Granting a pair that is already granted yields `409`, revoking a pair
//! that is not granted yields `404`. The caller identity is read from a
//! gateway-provided header and recorded as `granted_by`.
//!
//! ## Architecture
//!
//! - **Permissions**: request validation and the grant/revoke handlers
//! - **Database**: the `PermissionStore` trait with SQLite and in-memory backends
//! - **Routes**: axum routers for access management and health probes
//! - **Middleware**: request IDs, tracing spans and caller identity
//! - **Config**: environment-driven server configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use medchain_permissions::config::ServerConfig;
//! use medchain_permissions::database::create_permission_store;
//! use medchain_permissions::resources::ServerResources;
//! use medchain_permissions::server::AccessServer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let store = create_permission_store(&config.database).await?;
//!     let resources = Arc::new(ServerResources::new(store, Arc::new(config)));
//!     AccessServer::new(resources).run().await
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Permission persistence
pub mod database;

/// Error types and HTTP error responses
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Permission model and grant/revoke handlers
pub mod permissions;

/// Shared server state
pub mod resources;

/// HTTP routes
pub mod routes;

/// Server assembly and lifecycle
pub mod server;
