// ABOUTME: Permission storage abstraction with SQLite and in-memory backends
// ABOUTME: Grant and revoke handlers persist through the PermissionStore trait only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

//! # Permission Storage
//!
//! The [`PermissionStore`] trait persists subject → resource permissions.
//! Implementations must make `insert` and `remove` atomic with respect to the
//! `(subject, resource)` key: two concurrent inserts of the same key produce
//! exactly one success and one [`DatabaseError::Conflict`].

mod memory;
mod sqlite;

pub use memory::InMemoryPermissionStore;
pub use sqlite::SqlitePermissionStore;

pub use crate::errors::DatabaseError;

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::permissions::{Permission, PermissionKey};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// Persistence for granted permissions
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// Record a new permission
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Conflict` if a permission for the same
    /// `(subject, resource)` already exists, or a backend error
    async fn insert(&self, permission: &Permission) -> Result<(), DatabaseError>;

    /// Delete the permission for `key` and return it, `None` if absent
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    async fn remove(&self, key: &PermissionKey) -> Result<Option<Permission>, DatabaseError>;

    /// Look up the permission for `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails
    async fn get(&self, key: &PermissionKey) -> Result<Option<Permission>, DatabaseError>;

    /// Confirm the backend can serve requests
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable
    async fn health_check(&self) -> Result<(), DatabaseError>;

    /// Short backend name for logs and readiness output
    fn backend_name(&self) -> &'static str;
}

/// Open the permission store selected by `config`
///
/// # Errors
///
/// Returns an error if the SQLite database cannot be opened or migrated
pub async fn create_permission_store(
    config: &DatabaseConfig,
) -> Result<Arc<dyn PermissionStore>, DatabaseError> {
    let store: Arc<dyn PermissionStore> = match &config.url {
        DatabaseUrl::Memory => Arc::new(InMemoryPermissionStore::new()),
        DatabaseUrl::SQLiteMemory => Arc::new(SqlitePermissionStore::connect_in_memory().await?),
        DatabaseUrl::SQLite { path } => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    DatabaseError::ConnectionError {
                        context: format!("cannot create {}: {e}", parent.display()),
                    }
                })?;
            }
            Arc::new(SqlitePermissionStore::connect(path, config.max_connections).await?)
        }
    };

    info!(
        backend = store.backend_name(),
        url = %config.url.to_connection_string(),
        "Permission store ready"
    );
    Ok(store)
}
