// ABOUTME: Limits shared by request validation and the storage schema
// ABOUTME: Keeps identifier bounds in one place so both layers agree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

/// Input limits
pub mod limits {
    /// Maximum length, in characters, of a subject, resource or actor identifier
    pub const MAX_IDENTIFIER_LENGTH: usize = 255;
}
