// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed ServerConfig with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

//! Environment-based configuration management

use crate::constants::{defaults, env_vars};
use http::HeaderName;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("Invalid value for {key}: '{value}' ({reason})")]
    InvalidValue {
        /// Environment variable name
        key: &'static str,
        /// Raw value found
        value: String,
        /// Why it was rejected
        reason: String,
    },

    /// The configured database URL names an unsupported backend
    #[error("Unsupported database URL '{0}': only SQLite and the in-memory store are available")]
    UnsupportedDatabase(String),
}

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe permission store location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// SQLite held in memory, lost on shutdown
    SQLiteMemory,
    /// Process-local map without SQL, lost on shutdown
    Memory,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedDatabase` for empty values and for
    /// URLs with any scheme other than `sqlite:`
    pub fn parse_url(s: &str) -> Result<Self, ConfigError> {
        let s = s.trim();
        match s {
            "" => Err(ConfigError::UnsupportedDatabase(s.to_owned())),
            "memory" | ":memory:" => Ok(Self::Memory),
            "sqlite::memory:" => Ok(Self::SQLiteMemory),
            _ if s.contains("://") && !s.starts_with("sqlite:") => {
                Err(ConfigError::UnsupportedDatabase(s.to_owned()))
            }
            _ => {
                let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
                let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str),
                })
            }
        }
    }

    /// Convert to the connection string handed to the driver
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::SQLiteMemory => "sqlite::memory:".to_owned(),
            Self::Memory => "memory".to_owned(),
        }
    }

    /// Whether the store is backed by SQLite
    #[must_use]
    pub const fn is_sqlite(&self) -> bool {
        matches!(self, Self::SQLite { .. } | Self::SQLiteMemory)
    }

    /// Whether stored permissions are lost on shutdown
    #[must_use]
    pub const fn is_ephemeral(&self) -> bool {
        matches!(self, Self::SQLiteMemory | Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(
                defaults::DATABASE_URL
                    .strip_prefix("sqlite:")
                    .unwrap_or(defaults::DATABASE_URL),
            ),
        }
    }
}

/// Permission store configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Store location
    pub url: DatabaseUrl,
    /// Pool size for file-backed SQLite
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: defaults::DATABASE_MAX_CONNECTIONS,
        }
    }
}

/// HTTP serving configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Header carrying the caller identity
    pub actor_header: HeaderName,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Maximum accepted request body in bytes
    pub max_body_bytes: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            actor_header: HeaderName::from_static(defaults::ACTOR_HEADER),
            request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            max_body_bytes: defaults::MAX_BODY_BYTES,
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level used when `RUST_LOG` is unset
    pub log_level: LogLevel,
    /// Permission store
    pub database: DatabaseConfig,
    /// HTTP serving
    pub http: HttpConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            database: DatabaseConfig::default(),
            http: HttpConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_vars::HOST, defaults::HOST),
            http_port: parse_env(env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_vars::LOG_LEVEL, "info")),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or(
                    env_vars::DATABASE_URL,
                    defaults::DATABASE_URL,
                ))?,
                max_connections: parse_env(
                    env_vars::DATABASE_MAX_CONNECTIONS,
                    defaults::DATABASE_MAX_CONNECTIONS,
                )?,
            },
            http: HttpConfig {
                actor_header: parse_env(
                    env_vars::ACTOR_HEADER,
                    HeaderName::from_static(defaults::ACTOR_HEADER),
                )?,
                request_timeout: Duration::from_secs(parse_env(
                    env_vars::REQUEST_TIMEOUT_SECS,
                    defaults::REQUEST_TIMEOUT_SECS,
                )?),
                max_body_bytes: parse_env(env_vars::MAX_BODY_BYTES, defaults::MAX_BODY_BYTES)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: env_vars::DATABASE_MAX_CONNECTIONS,
                value: "0".to_owned(),
                reason: "must be at least 1".to_owned(),
            });
        }
        if self.http.request_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: env_vars::REQUEST_TIMEOUT_SECS,
                value: "0".to_owned(),
                reason: "must be at least 1".to_owned(),
            });
        }
        if self.http.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                key: env_vars::MAX_BODY_BYTES,
                value: "0".to_owned(),
                reason: "must be at least 1".to_owned(),
            });
        }
        Ok(())
    }

    /// Address to bind the HTTP listener to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line-per-setting summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Medchain Permissions Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Database: {}{}\n\
             - Actor Header: {}\n\
             - Request Timeout: {}s\n\
             - Max Body: {} bytes",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.database.url.to_connection_string(),
            if self.database.url.is_ephemeral() {
                " (ephemeral)"
            } else {
                ""
            },
            self.http.actor_header,
            self.http.request_timeout.as_secs(),
            self.http.max_body_bytes,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to `default` when unset
fn parse_env<T>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key,
                value,
                reason: e.to_string(),
            }),
        Err(_) => Ok(default),
    }
}
