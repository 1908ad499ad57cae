// ABOUTME: Validation for subject, resource and actor identifiers
// ABOUTME: Rejects blank, over-long and control-character values before they reach storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

use crate::constants::limits::MAX_IDENTIFIER_LENGTH;
use crate::errors::{AppError, AppResult, ErrorCode};

/// Validate an identifier and return it trimmed
///
/// # Errors
///
/// - `MissingRequiredField` if the value is empty after trimming
/// - `ValueOutOfRange` if it exceeds `MAX_IDENTIFIER_LENGTH` characters
/// - `InvalidInput` if it contains control characters
pub fn validate_identifier(field: &str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            format!("{field} must not be empty"),
        ));
    }

    if trimmed.chars().count() > MAX_IDENTIFIER_LENGTH {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be at most {MAX_IDENTIFIER_LENGTH} characters"),
        ));
    }

    if trimmed.chars().any(char::is_control) {
        return Err(AppError::invalid_input(format!(
            "{field} must not contain control characters"
        )));
    }

    Ok(trimmed.to_owned())
}
