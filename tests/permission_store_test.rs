// ABOUTME: Contract tests run against every PermissionStore backend
// ABOUTME: In-memory, SQLite in-memory and SQLite file stores must behave identically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Permission store contract tests

mod common;

use common::init_test_logging;
use medchain_permissions::{
    config::{DatabaseConfig, DatabaseUrl},
    database::{
        create_permission_store, DatabaseError, InMemoryPermissionStore, PermissionStore,
        SqlitePermissionStore,
    },
    permissions::{Permission, PermissionKey},
};
use std::sync::Arc;
use tempfile::TempDir;

fn key(subject: &str, resource: &str) -> PermissionKey {
    PermissionKey {
        subject: subject.to_owned(),
        resource: resource.to_owned(),
    }
}

async fn assert_store_contract(store: Arc<dyn PermissionStore>) {
    let permission = Permission::new(key("user:42", "record/7"), "admin:alice");

    assert!(store.get(&permission.key()).await.unwrap().is_none());

    store.insert(&permission).await.unwrap();
    let stored = store.get(&permission.key()).await.unwrap().unwrap();
    assert_eq!(stored.id, permission.id);
    assert_eq!(stored.granted_by, "admin:alice");
    assert_eq!(
        stored.granted_at.timestamp_micros(),
        permission.granted_at.timestamp_micros()
    );

    let duplicate = Permission::new(key("user:42", "record/7"), "admin:bob");
    let error = store.insert(&duplicate).await.unwrap_err();
    assert!(
        matches!(error, DatabaseError::Conflict { .. }),
        "{}: expected conflict, got {error:?}",
        store.backend_name()
    );

    // Same subject on another resource, and another subject on the same resource, are distinct
    store
        .insert(&Permission::new(key("user:42", "record/8"), "admin:alice"))
        .await
        .unwrap();
    store
        .insert(&Permission::new(key("user:43", "record/7"), "admin:alice"))
        .await
        .unwrap();

    let removed = store.remove(&permission.key()).await.unwrap().unwrap();
    assert_eq!(removed.id, permission.id);
    assert!(store.get(&permission.key()).await.unwrap().is_none());
    assert!(store.remove(&permission.key()).await.unwrap().is_none());
    assert!(store.get(&key("user:42", "record/8")).await.unwrap().is_some());

    store.health_check().await.unwrap();
}

async fn assert_concurrent_inserts_single_winner(store: Arc<dyn PermissionStore>) {
    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let permission =
                    Permission::new(key("user:42", "record/7"), format!("admin:{i}"));
                store.insert(&permission).await
            })
        })
        .collect();

    let mut successes = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(()) => successes += 1,
            Err(error) => assert!(
                matches!(error, DatabaseError::Conflict { .. }),
                "unexpected error {error:?}"
            ),
        }
    }
    assert_eq!(successes, 1);
}

#[tokio::test]
async fn test_memory_store_contract() {
    init_test_logging();
    assert_store_contract(Arc::new(InMemoryPermissionStore::new())).await;
}

#[tokio::test]
async fn test_sqlite_memory_store_contract() {
    init_test_logging();
    let store = SqlitePermissionStore::connect_in_memory().await.unwrap();
    assert_store_contract(Arc::new(store)).await;
}

#[tokio::test]
async fn test_sqlite_file_store_contract() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let store = SqlitePermissionStore::connect(&dir.path().join("permissions.db"), 4)
        .await
        .unwrap();
    assert_store_contract(Arc::new(store)).await;
}

#[tokio::test]
async fn test_memory_store_concurrent_inserts() {
    init_test_logging();
    assert_concurrent_inserts_single_winner(Arc::new(InMemoryPermissionStore::new())).await;
}

#[tokio::test]
async fn test_sqlite_store_concurrent_inserts() {
    init_test_logging();
    let store = SqlitePermissionStore::connect_in_memory().await.unwrap();
    assert_concurrent_inserts_single_winner(Arc::new(store)).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_sqlite_file_store_concurrent_inserts() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let store = SqlitePermissionStore::connect(&dir.path().join("permissions.db"), 5)
        .await
        .unwrap();
    assert_concurrent_inserts_single_winner(Arc::new(store)).await;
}

#[tokio::test]
async fn test_sqlite_file_store_persists_across_reopen() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("permissions.db");
    let permission = Permission::new(key("user:42", "record/7"), "admin:alice");

    {
        let store = SqlitePermissionStore::connect(&path, 1).await.unwrap();
        store.insert(&permission).await.unwrap();
        store.pool().close().await;
    }

    let reopened = SqlitePermissionStore::connect(&path, 1).await.unwrap();
    let stored = reopened.get(&permission.key()).await.unwrap().unwrap();
    assert_eq!(stored.id, permission.id);
}

#[tokio::test]
async fn test_factory_creates_parent_directories() {
    init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("data").join("permissions.db");
    let config = DatabaseConfig {
        url: DatabaseUrl::SQLite { path: path.clone() },
        max_connections: 2,
    };

    let store = create_permission_store(&config).await.unwrap();
    assert_eq!(store.backend_name(), "sqlite");
    assert!(path.exists());
}

#[tokio::test]
async fn test_factory_selects_memory_backends() {
    init_test_logging();
    let memory = create_permission_store(&DatabaseConfig {
        url: DatabaseUrl::Memory,
        max_connections: 1,
    })
    .await
    .unwrap();
    assert_eq!(memory.backend_name(), "memory");

    let sqlite = create_permission_store(&DatabaseConfig {
        url: DatabaseUrl::SQLiteMemory,
        max_connections: 1,
    })
    .await
    .unwrap();
    assert_eq!(sqlite.backend_name(), "sqlite");
}
