// ABOUTME: Structured error types for permission storage operations
// ABOUTME: Classifies driver failures so uniqueness violations surface as conflicts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Medchain

use thiserror::Error;

/// Errors raised by a permission store backend
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A record with the same identity already exists
    #[error("{context}")]
    Conflict {
        /// What collided
        context: String,
    },

    /// The backend could not be reached
    #[error("Database connection failed: {context}")]
    ConnectionError {
        /// Driver message
        context: String,
    },

    /// A statement failed
    #[error("Database query failed: {context}")]
    QueryError {
        /// Driver message
        context: String,
    },

    /// Schema setup failed
    #[error("Database migration failed: {context}")]
    MigrationError {
        /// Driver message
        context: String,
    },

    /// A stored row could not be decoded
    #[error("Failed to decode stored record: {context}")]
    SerializationError {
        /// Which column or value was bad
        context: String,
    },
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => Self::Conflict {
                context: db_error.message().to_owned(),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::ConnectionError {
                context: error.to_string(),
            },
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_) => Self::SerializationError {
                context: error.to_string(),
            },
            _ => Self::QueryError {
                context: error.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let error = DatabaseError::ConnectionError {
            context: "unable to open database file".to_owned(),
        };
        assert_eq!(
            error.to_string(),
            "Database connection failed: unable to open database file"
        );
    }

    #[cfg(feature = "database-errors")]
    #[test]
    fn test_pool_timeout_is_connection_error() {
        let error = DatabaseError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(error, DatabaseError::ConnectionError { .. }));
    }

    #[cfg(feature = "database-errors")]
    #[test]
    fn test_row_not_found_is_query_error() {
        let error = DatabaseError::from(sqlx::Error::RowNotFound);
        assert!(matches!(error, DatabaseError::QueryError { .. }));
    }
}
