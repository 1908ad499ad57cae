// ABOUTME: Identity of the caller performing a grant or revoke
// ABOUTME: Asserted by the upstream gateway; validated like any other identifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

use super::validate_identifier;
use crate::errors::{AppError, AppResult};
use std::fmt;

/// Who is performing the operation, recorded as `granted_by` on grants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor(String);

impl Actor {
    /// Validate and wrap a caller identity
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` if the identity is blank, too long or contains
    /// control characters
    pub fn parse(value: &str) -> AppResult<Self> {
        validate_identifier("actor", value)
            .map(Self)
            .map_err(|e| AppError::auth_invalid(e.message))
    }

    /// The identity string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_parse_trims() {
        assert_eq!(Actor::parse(" admin:1 ").unwrap().as_str(), "admin:1");
    }

    #[test]
    fn test_blank_actor_is_auth_invalid() {
        let error = Actor::parse("").unwrap_err();
        assert_eq!(error.code, ErrorCode::AuthInvalid);
        assert_eq!(error.http_status(), 401);
    }
}
