// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

//! Integration tests for request ID middleware
//!
//! Tests the request ID middleware functionality including:
//! - UUID generation for each request
//! - Propagation of a caller-supplied request ID
//! - Request ID availability in handlers via extensions

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::{
    body::{to_bytes, Body},
    http::{Request as HttpRequest, StatusCode},
    middleware,
    routing::get,
    Extension, Router,
};
use medchain_permissions::middleware::request_id::{request_id_middleware, RequestId};
use std::error::Error;
use tower::ServiceExt;
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";

async fn test_handler(Extension(request_id): Extension<RequestId>) -> String {
    format!("Request ID: {}", request_id.as_str())
}

fn app() -> Router {
    Router::new()
        .route("/", get(test_handler))
        .layer(middleware::from_fn(request_id_middleware))
}

#[tokio::test]
async fn test_request_id_middleware_generates_id() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder().uri("/").body(Body::empty())?;

    let response = app().oneshot(request).await?;

    let request_id_header = response.headers().get(REQUEST_ID_HEADER);
    assert!(request_id_header.is_some(), "Request ID header not present");

    if let Some(header_value) = request_id_header {
        let request_id_str = header_value.to_str()?;
        assert!(
            Uuid::parse_str(request_id_str).is_ok(),
            "Request ID is not a valid UUID"
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_request_id_available_in_handler() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder().uri("/").body(Body::empty())?;

    let response = app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let header = response.headers()[REQUEST_ID_HEADER].to_str()?.to_owned();
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    let body_str = String::from_utf8(body.to_vec())?;
    assert_eq!(body_str, format!("Request ID: {header}"));

    Ok(())
}

#[tokio::test]
async fn test_request_id_propagated_from_caller() -> Result<(), Box<dyn Error>> {
    let request = HttpRequest::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, "gateway-7f3a")
        .body(Body::empty())?;

    let response = app().oneshot(request).await?;

    assert_eq!(response.headers()[REQUEST_ID_HEADER], "gateway-7f3a");
    let body = to_bytes(response.into_body(), usize::MAX).await?;
    assert_eq!(body.as_ref(), b"Request ID: gateway-7f3a");

    Ok(())
}

#[tokio::test]
async fn test_unacceptable_request_id_is_replaced() -> Result<(), Box<dyn Error>> {
    let oversized = "x".repeat(200);
    let request = HttpRequest::builder()
        .uri("/")
        .header(REQUEST_ID_HEADER, oversized.as_str())
        .body(Body::empty())?;

    let response = app().oneshot(request).await?;

    let echoed = response.headers()[REQUEST_ID_HEADER].to_str()?;
    assert_ne!(echoed, oversized);
    assert!(Uuid::parse_str(echoed).is_ok());

    Ok(())
}

#[tokio::test]
async fn test_unique_request_ids_per_request() -> Result<(), Box<dyn Error>> {
    let app = app();

    let first = app
        .clone()
        .oneshot(HttpRequest::builder().uri("/").body(Body::empty())?)
        .await?;
    let second = app
        .oneshot(HttpRequest::builder().uri("/").body(Body::empty())?)
        .await?;

    assert_ne!(
        first.headers()[REQUEST_ID_HEADER],
        second.headers()[REQUEST_ID_HEADER]
    );

    Ok(())
}
