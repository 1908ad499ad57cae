// ABOUTME: Core types for the Medchain permissions service
// ABOUTME: Foundation crate with error handling, the permission model and input limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

#![deny(unsafe_code)]

//! # Medchain Core
//!
//! Shared types for the Medchain permissions service. Kept free of the HTTP
//! server and storage engine so the model and error taxonomy compile quickly
//! and can be reused by other Medchain components.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `DatabaseError`
//! - **permissions**: The `Permission` record, request bodies and identifier validation
//! - **constants**: Input limits shared by validation and storage

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Permission records, access requests and identifier validation
pub mod permissions;

/// Limits shared across the service
pub mod constants;
