// ABOUTME: HTTP middleware for request IDs, timeouts, tracing spans and caller identity
// ABOUTME: Layers are assembled onto the router in server.rs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

/// Caller identity extractor
pub mod actor;
/// Request ID generation and propagation
pub mod request_id;
/// Per-request deadline
pub mod timeout;
/// Request tracing spans
pub mod tracing;

pub use request_id::{request_id_middleware, RequestId};
pub use timeout::request_timeout_middleware;
pub use tracing::{create_request_span, RequestTrace};
