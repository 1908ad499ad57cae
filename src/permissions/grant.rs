// ABOUTME: Grant handler: validates a grant request and records a permission
// ABOUTME: A second grant for the same subject and resource is rejected as a conflict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

use super::{AccessRequest, Actor, Permission};
use crate::database::{DatabaseError, PermissionStore};
use crate::errors::{AppError, AppResult};
use std::sync::Arc;
use tracing::{debug, info};

/// Records permissions on behalf of a caller
#[derive(Clone)]
pub struct AccessGrantHandler {
    store: Arc<dyn PermissionStore>,
}

impl AccessGrantHandler {
    /// Create a handler writing to `store`
    #[must_use]
    pub fn new(store: Arc<dyn PermissionStore>) -> Self {
        Self { store }
    }

    /// Grant `request.subject` access to `request.resource`
    ///
    /// # Errors
    ///
    /// - 400-class error if the identifiers are malformed
    /// - `ResourceAlreadyExists` if the permission is already granted
    /// - `DatabaseError` if the store fails
    pub async fn grant(&self, actor: &Actor, request: AccessRequest) -> AppResult<Permission> {
        let key = request.into_key()?;
        let permission = Permission::new(key, actor.as_str());

        match self.store.insert(&permission).await {
            Ok(()) => {
                info!(
                    permission_id = %permission.id,
                    subject = %permission.subject,
                    resource = %permission.resource,
                    granted_by = %actor,
                    "Permission granted"
                );
                Ok(permission)
            }
            Err(DatabaseError::Conflict { .. }) => {
                debug!(
                    subject = %permission.subject,
                    resource = %permission.resource,
                    granted_by = %actor,
                    "Grant rejected, permission already exists"
                );
                Err(AppError::already_exists(permission.key().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
