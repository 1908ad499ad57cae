// ABOUTME: Extractor reading the caller identity from the gateway-provided header
// ABOUTME: Missing identity rejects the request with 401 before the body is parsed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

use super::request_id::RequestId;
use crate::errors::AppError;
use crate::permissions::Actor;
use crate::resources::ServerResources;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;
use tracing::Span;

#[async_trait]
impl FromRequestParts<Arc<ServerResources>> for Actor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        resources: &Arc<ServerResources>,
    ) -> Result<Self, Self::Rejection> {
        let with_request_id = |error: AppError| match parts.extensions.get::<RequestId>() {
            Some(request_id) => error.with_request_id(request_id.as_str()),
            None => error,
        };

        let header_name = &resources.config.http.actor_header;
        let Some(value) = parts.headers.get(header_name) else {
            return Err(with_request_id(AppError::auth_required()));
        };

        let actor = value
            .to_str()
            .map_err(|_| AppError::auth_invalid(format!("{header_name} must be visible ASCII")))
            .and_then(Actor::parse)
            .map_err(with_request_id)?;

        Span::current().record("actor", actor.as_str());
        Ok(actor)
    }
}
