// ABOUTME: Service-wide constants: environment variable names, defaults and header names
// ABOUTME: Configuration loading and middleware read their names and fallbacks from here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

//! # Constants Module
//!
//! Names of the environment variables the service reads, the defaults used
//! when they are absent, and the HTTP header names it understands.

pub use medchain_core::constants::limits;

/// Environment variable names
pub mod env_vars {
    /// Interface to bind
    pub const HOST: &str = "HOST";
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Permission store location
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// SQLite pool size
    pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
    /// Header carrying the caller identity
    pub const ACTOR_HEADER: &str = "ACTOR_HEADER";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Maximum accepted request body in bytes
    pub const MAX_BODY_BYTES: &str = "MAX_BODY_BYTES";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level used when `RUST_LOG` is unset
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Defaults applied when the corresponding variable is unset
pub mod defaults {
    /// Loopback only unless told otherwise
    pub const HOST: &str = "127.0.0.1";
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 8081;
    /// On-disk SQLite store
    pub const DATABASE_URL: &str = "sqlite:./data/medchain_permissions.db";
    /// Pool size for file-backed SQLite
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
    /// Caller identity header set by the gateway
    pub const ACTOR_HEADER: &str = "x-actor-id";
    /// Per-request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Two identifiers plus JSON framing fit comfortably
    pub const MAX_BODY_BYTES: usize = 16 * 1024;
}

/// HTTP header names
pub mod headers {
    /// Request correlation header
    pub const REQUEST_ID: &str = "x-request-id";
    /// Longest incoming request ID that is propagated instead of replaced
    pub const MAX_REQUEST_ID_LENGTH: usize = 128;
}

/// Service identity used in logs
pub mod service_names {
    /// Name reported in startup logs and readiness output
    pub const MEDCHAIN_PERMISSIONS: &str = "medchain-permissions";
}
