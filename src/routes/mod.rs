// ABOUTME: Route modules for the permission service HTTP surface
// ABOUTME: Each route group builds its own axum Router from shared resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

/// Grant and revoke endpoints
pub mod access;
/// Liveness and readiness probes
pub mod health;

pub use access::AccessRoutes;
pub use health::HealthRoutes;
