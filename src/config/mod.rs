// ABOUTME: Configuration module for server settings loaded from the environment
// ABOUTME: Re-exports the typed ServerConfig and its parts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

/// Environment and server configuration
pub mod environment;

pub use environment::{
    ConfigError, DatabaseConfig, DatabaseUrl, Environment, HttpConfig, LogLevel, ServerConfig,
};
