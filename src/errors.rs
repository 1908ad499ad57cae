// ABOUTME: Error types used by the permission service
// ABOUTME: Re-exports the shared error model from medchain-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

//! # Error Handling
//!
//! All fallible service operations return [`AppResult`]. [`AppError`]
//! carries an [`ErrorCode`] that determines the HTTP status and the
//! `code` field of the JSON error body.

pub use medchain_core::errors::*;
