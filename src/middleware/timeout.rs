// ABOUTME: Per-request timeout middleware answering with the standard JSON error body
// ABOUTME: Cancels the handler future once the configured deadline passes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

use super::request_id::RequestId;
use crate::errors::{AppError, ErrorCode};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::time::Duration;
use tracing::warn;

/// Run the rest of the stack under `timeout`, replying 408 when it elapses
///
/// Must sit inside the request ID middleware so the error body carries the ID.
pub async fn request_timeout_middleware(
    State(timeout): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = request.extensions().get::<RequestId>().cloned();

    if let Ok(response) = tokio::time::timeout(timeout, next.run(request)).await {
        return response;
    }

    let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
    warn!(timeout_ms, "Request timed out");

    let error = AppError::new(
        ErrorCode::RequestTimeout,
        format!("Request not completed within {timeout_ms} ms"),
    );
    let error = match request_id {
        Some(id) => error.with_request_id(id.as_str()),
        None => error,
    };
    error.into_response()
}
