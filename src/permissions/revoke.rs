// ABOUTME: Revoke handler: validates a revoke request and removes the matching permission
// ABOUTME: Revoking a permission that was never granted is reported as not found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

use super::{AccessRequest, Actor, Permission};
use crate::database::PermissionStore;
use crate::errors::{AppError, AppResult};
use std::sync::Arc;
use tracing::{debug, info};

/// Removes permissions on behalf of a caller
#[derive(Clone)]
pub struct AccessRevokeHandler {
    store: Arc<dyn PermissionStore>,
}

impl AccessRevokeHandler {
    /// Create a handler removing from `store`
    #[must_use]
    pub fn new(store: Arc<dyn PermissionStore>) -> Self {
        Self { store }
    }

    /// Revoke `request.subject`'s access to `request.resource`, returning the
    /// permission that was removed
    ///
    /// # Errors
    ///
    /// - 400-class error if the identifiers are malformed
    /// - `ResourceNotFound` if no such permission exists
    /// - `DatabaseError` if the store fails
    pub async fn revoke(&self, actor: &Actor, request: AccessRequest) -> AppResult<Permission> {
        let key = request.into_key()?;

        let Some(permission) = self.store.remove(&key).await? else {
            debug!(
                subject = %key.subject,
                resource = %key.resource,
                revoked_by = %actor,
                "Revoke rejected, no such permission"
            );
            return Err(AppError::not_found(key.to_string()));
        };

        info!(
            permission_id = %permission.id,
            subject = %permission.subject,
            resource = %permission.resource,
            granted_by = %permission.granted_by,
            revoked_by = %actor,
            "Permission revoked"
        );
        Ok(permission)
    }
}
