// ABOUTME: Permission record and access request types for grant and revoke
// ABOUTME: A permission ties one subject to one resource and remembers who granted it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

//! # Permissions
//!
//! A [`Permission`] associates a subject (user, service, ...) with a
//! resource. The pair `(subject, resource)` is the identity of a permission:
//! at most one exists per pair, it is created by a grant and deleted by a
//! revoke.

/// Identifier validation rules
pub mod validation;

pub use validation::validate_identifier;

use crate::errors::AppResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A granted permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// Unique permission identifier, assigned on grant
    pub id: Uuid,
    /// Identity the permission applies to
    pub subject: String,
    /// Protected entity
    pub resource: String,
    /// Identity that issued the grant
    pub granted_by: String,
    /// When the grant was recorded
    pub granted_at: DateTime<Utc>,
}

impl Permission {
    /// Create a new permission for a validated key, stamped now
    #[must_use]
    pub fn new(key: PermissionKey, granted_by: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: key.subject,
            resource: key.resource,
            granted_by: granted_by.into(),
            granted_at: Utc::now(),
        }
    }

    /// The `(subject, resource)` pair identifying this permission
    #[must_use]
    pub fn key(&self) -> PermissionKey {
        PermissionKey {
            subject: self.subject.clone(),
            resource: self.resource.clone(),
        }
    }
}

/// Validated `(subject, resource)` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PermissionKey {
    /// Identity the permission applies to
    pub subject: String,
    /// Protected entity
    pub resource: String,
}

impl std::fmt::Display for PermissionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Permission for subject '{}' on resource '{}'",
            self.subject, self.resource
        )
    }
}

/// Request body shared by the grant and revoke endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessRequest {
    /// Identity the permission applies to
    pub subject: String,
    /// Protected entity
    pub resource: String,
}

impl AccessRequest {
    /// Create a request
    #[must_use]
    pub fn new(subject: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            resource: resource.into(),
        }
    }

    /// Validate both identifiers and return the trimmed key
    ///
    /// # Errors
    ///
    /// Returns a 400-class `AppError` if either identifier is blank, too
    /// long or contains control characters
    pub fn into_key(self) -> AppResult<PermissionKey> {
        Ok(PermissionKey {
            subject: validate_identifier("subject", &self.subject)?,
            resource: validate_identifier("resource", &self.resource)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_into_key_trims_identifiers() {
        let key = AccessRequest::new("  user:42 ", "record/7\t").into_key().unwrap();
        assert_eq!(key.subject, "user:42");
        assert_eq!(key.resource, "record/7");
    }

    #[test]
    fn test_into_key_reports_offending_field() {
        let error = AccessRequest::new("user:42", "   ").into_key().unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert!(error.message.contains("resource"));
    }

    #[test]
    fn test_new_permission_takes_key_and_actor() {
        let key = AccessRequest::new("user:42", "record/7").into_key().unwrap();
        let permission = Permission::new(key.clone(), "admin:1");

        assert_eq!(permission.key(), key);
        assert_eq!(permission.granted_by, "admin:1");
        assert!(permission.granted_at <= Utc::now());
    }

    #[test]
    fn test_access_request_rejects_unknown_fields() {
        let result: Result<AccessRequest, _> = serde_json::from_str(
            r#"{"subject": "user:42", "resource": "record/7", "role": "owner"}"#,
        );
        assert!(result.is_err());
    }
}
