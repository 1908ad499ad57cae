// ABOUTME: SQLite permission store built on a sqlx connection pool
// ABOUTME: Uniqueness of (subject, resource) is enforced by the schema, revoke is DELETE RETURNING
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

use super::{DatabaseError, PermissionStore};
use crate::permissions::{Permission, PermissionKey};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use std::path::Path;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// SQLite-backed `PermissionStore`
#[derive(Clone)]
pub struct SqlitePermissionStore {
    pool: SqlitePool,
}

impl SqlitePermissionStore {
    /// Open (creating if missing) the database file at `path` and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the schema cannot be created
    pub async fn connect(path: &Path, max_connections: u32) -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::ConnectionError {
                context: format!("{}: {e}", path.display()),
            })?;

        Self::from_pool(pool).await
    }

    /// Open a private in-memory database
    ///
    /// The pool is pinned to a single connection that never expires, since each
    /// SQLite memory connection is its own database.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be created
    pub async fn connect_in_memory() -> Result<Self, DatabaseError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::ConnectionError {
                context: e.to_string(),
            })?;

        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, DatabaseError> {
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the permissions table and its indexes
    async fn migrate(&self) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS permissions (
                id TEXT PRIMARY KEY,
                subject TEXT NOT NULL,
                resource TEXT NOT NULL,
                granted_by TEXT NOT NULL,
                granted_at TEXT NOT NULL,
                UNIQUE (subject, resource)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::MigrationError {
            context: format!("permissions table: {e}"),
        })?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_permissions_resource ON permissions(resource)")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::MigrationError {
                context: format!("idx_permissions_resource: {e}"),
            })?;

        debug!("Permission schema migrated");
        Ok(())
    }

    fn row_to_permission(row: &SqliteRow) -> Result<Permission, DatabaseError> {
        let id: String = row.try_get("id")?;
        let granted_at: String = row.try_get("granted_at")?;

        Ok(Permission {
            id: Uuid::parse_str(&id).map_err(|e| DatabaseError::SerializationError {
                context: format!("permissions.id '{id}': {e}"),
            })?,
            subject: row.try_get("subject")?,
            resource: row.try_get("resource")?,
            granted_by: row.try_get("granted_by")?,
            granted_at: DateTime::parse_from_rfc3339(&granted_at)
                .map_err(|e| DatabaseError::SerializationError {
                    context: format!("permissions.granted_at '{granted_at}': {e}"),
                })?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl PermissionStore for SqlitePermissionStore {
    async fn insert(&self, permission: &Permission) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            INSERT INTO permissions (id, subject, resource, granted_by, granted_at)
            VALUES (?, ?, ?, ?, ?)
            ",
        )
        .bind(permission.id.to_string())
        .bind(&permission.subject)
        .bind(&permission.resource)
        .bind(&permission.granted_by)
        .bind(permission.granted_at.to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove(&self, key: &PermissionKey) -> Result<Option<Permission>, DatabaseError> {
        let row = sqlx::query(
            r"
            DELETE FROM permissions
            WHERE subject = ? AND resource = ?
            RETURNING id, subject, resource, granted_by, granted_at
            ",
        )
        .bind(&key.subject)
        .bind(&key.resource)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_permission).transpose()
    }

    async fn get(&self, key: &PermissionKey) -> Result<Option<Permission>, DatabaseError> {
        let row = sqlx::query(
            r"
            SELECT id, subject, resource, granted_by, granted_at
            FROM permissions
            WHERE subject = ? AND resource = ?
            ",
        )
        .bind(&key.subject)
        .bind(&key.resource)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::row_to_permission).transpose()
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
