// ABOUTME: In-memory permission store backed by a concurrent hash map
// ABOUTME: Used for ephemeral deployments and tests; contents are lost on shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

use super::{DatabaseError, PermissionStore};
use crate::permissions::{Permission, PermissionKey};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// `PermissionStore` held in process memory
#[derive(Debug, Default)]
pub struct InMemoryPermissionStore {
    permissions: DashMap<PermissionKey, Permission>,
}

impl InMemoryPermissionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored permissions
    #[must_use]
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Whether the store holds no permissions
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}

#[async_trait]
impl PermissionStore for InMemoryPermissionStore {
    async fn insert(&self, permission: &Permission) -> Result<(), DatabaseError> {
        // The entry guard holds the shard lock, so check-and-insert is atomic
        match self.permissions.entry(permission.key()) {
            Entry::Occupied(entry) => Err(DatabaseError::Conflict {
                context: format!("{} already exists", entry.key()),
            }),
            Entry::Vacant(entry) => {
                entry.insert(permission.clone());
                Ok(())
            }
        }
    }

    async fn remove(&self, key: &PermissionKey) -> Result<Option<Permission>, DatabaseError> {
        Ok(self.permissions.remove(key).map(|(_, permission)| permission))
    }

    async fn get(&self, key: &PermissionKey) -> Result<Option<Permission>, DatabaseError> {
        Ok(self.permissions.get(key).map(|entry| entry.value().clone()))
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permissions::AccessRequest;

    #[tokio::test]
    async fn test_len_tracks_insert_and_remove() {
        let store = InMemoryPermissionStore::new();
        let key = AccessRequest::new("user:1", "chart/9").into_key().unwrap();
        let permission = Permission::new(key.clone(), "admin:1");

        assert!(store.is_empty());
        store.insert(&permission).await.unwrap();
        assert_eq!(store.len(), 1);

        store.remove(&key).await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_conflict_message_names_the_pair() {
        let store = InMemoryPermissionStore::new();
        let key = AccessRequest::new("user:1", "chart/9").into_key().unwrap();
        store
            .insert(&Permission::new(key.clone(), "admin:1"))
            .await
            .unwrap();

        let error = store
            .insert(&Permission::new(key, "admin:2"))
            .await
            .unwrap_err();
        assert!(error.to_string().contains("'user:1'"));
    }
}
