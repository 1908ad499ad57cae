// ABOUTME: Grant and revoke handlers plus the permission model re-exported from medchain-core
// ABOUTME: Handlers validate input, call the PermissionStore and translate store outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

pub use medchain_core::permissions::*;

/// Caller identity attached to grant and revoke operations
pub mod actor;
/// Grant handler
pub mod grant;
/// Revoke handler
pub mod revoke;

pub use actor::Actor;
pub use grant::AccessGrantHandler;
pub use revoke::AccessRevokeHandler;
