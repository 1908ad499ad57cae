// ABOUTME: HTTP routes for granting and revoking access to resources
// ABOUTME: POST /grant/ and POST /revoke/ delegate to the permission handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

//! Access management routes
//!
//! Both endpoints accept a JSON body `{"subject": ..., "resource": ...}` and
//! return the affected permission. Only `POST` is routed; any other method on
//! these paths yields 405 and any other path 404.

use crate::{
    errors::{AppError, ErrorCode},
    middleware::RequestId,
    permissions::{AccessRequest, Actor},
    resources::ServerResources,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Extension, Json, Router,
};
use std::sync::Arc;

/// Grant and revoke routes
pub struct AccessRoutes;

impl AccessRoutes {
    /// Create the access management routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/grant/", post(Self::handle_grant))
            .route("/revoke/", post(Self::handle_revoke))
            .with_state(resources)
    }

    async fn handle_grant(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        actor: Actor,
        body: Result<Json<AccessRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request_id = request_id.map(|Extension(id)| id);
        let request = parse_body(body).map_err(|e| attach(e, request_id.as_ref()))?;

        let permission = resources
            .grant_handler
            .grant(&actor, request)
            .await
            .map_err(|e| attach(e, request_id.as_ref()))?;

        Ok((StatusCode::CREATED, Json(permission)).into_response())
    }

    async fn handle_revoke(
        State(resources): State<Arc<ServerResources>>,
        request_id: Option<Extension<RequestId>>,
        actor: Actor,
        body: Result<Json<AccessRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let request_id = request_id.map(|Extension(id)| id);
        let request = parse_body(body).map_err(|e| attach(e, request_id.as_ref()))?;

        let permission = resources
            .revoke_handler
            .revoke(&actor, request)
            .await
            .map_err(|e| attach(e, request_id.as_ref()))?;

        Ok((StatusCode::OK, Json(permission)).into_response())
    }
}

/// Unwrap the JSON body, turning extractor rejections into 400 errors
fn parse_body(body: Result<Json<AccessRequest>, JsonRejection>) -> Result<AccessRequest, AppError> {
    match body {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => Err(AppError::new(
            ErrorCode::InvalidFormat,
            format!("Invalid request body: {}", rejection.body_text()),
        )),
    }
}

fn attach(error: AppError, request_id: Option<&RequestId>) -> AppError {
    match request_id {
        Some(id) => error.with_request_id(id.as_str()),
        None => error,
    }
}
