// ABOUTME: Request tracing spans for structured logging of every HTTP request
// ABOUTME: Plugs into tower-http TraceLayer to record status and latency on the span
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

use axum::http::{Request, Response};
use std::time::Duration;
use tower_http::trace::{MakeSpan, OnResponse};
use tracing::{info, warn, Span};

/// Create a tracing span for HTTP requests
#[must_use]
pub fn create_request_span(method: &str, path: &str) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = tracing::field::Empty,
        actor = tracing::field::Empty,
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// `TraceLayer` hooks: opens the request span and closes it with the outcome
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestTrace;

impl<B> MakeSpan<B> for RequestTrace {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        create_request_span(request.method().as_str(), request.uri().path())
    }
}

impl<B> OnResponse<B> for RequestTrace {
    fn on_response(self, response: &Response<B>, latency: Duration, span: &Span) {
        let status = response.status();
        let duration_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        span.record("status_code", status.as_u16());
        span.record("duration_ms", duration_ms);

        if status.is_server_error() {
            warn!(status = status.as_u16(), duration_ms, "Request completed with server error");
        } else {
            info!(status = status.as_u16(), duration_ms, "Request completed");
        }
    }
}
