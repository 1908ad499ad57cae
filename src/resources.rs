// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Owns the permission store, both handlers and the loaded configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

use crate::config::ServerConfig;
use crate::database::PermissionStore;
use crate::permissions::{AccessGrantHandler, AccessRevokeHandler};
use std::sync::Arc;

/// Everything a request handler needs, built once at startup
#[derive(Clone)]
pub struct ServerResources {
    /// Backing permission store
    pub store: Arc<dyn PermissionStore>,
    /// Grant operation
    pub grant_handler: AccessGrantHandler,
    /// Revoke operation
    pub revoke_handler: AccessRevokeHandler,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wire the handlers to a shared store
    #[must_use]
    pub fn new(store: Arc<dyn PermissionStore>, config: Arc<ServerConfig>) -> Self {
        Self {
            grant_handler: AccessGrantHandler::new(Arc::clone(&store)),
            revoke_handler: AccessRevokeHandler::new(Arc::clone(&store)),
            store,
            config,
        }
    }
}
