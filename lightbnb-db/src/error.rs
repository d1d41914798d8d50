//! Error types for lightbnb-db

use thiserror::Error;

use crate::models::ValidationError;

pub type Result<T> = std::result::Result<T, DbError>;

/// Database error type
///
/// "No rows" is not an error for lookups; those return `Ok(None)`.
/// `NotFound` is reserved for operations that must produce a row.
#[derive(Debug, Error)]
pub enum DbError {
    #[error("could not connect to database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Query(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration error: {reason}")]
    Config { reason: String },
}

impl DbError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DbError::not_found("property", 42);
        assert_eq!(err.to_string(), "not found: property '42'");

        let err = DbError::config("pool_size must be at least 1");
        assert_eq!(
            err.to_string(),
            "configuration error: pool_size must be at least 1"
        );
    }

    #[test]
    fn sqlx_errors_become_query_errors() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Query(_)));
    }

    #[test]
    fn validation_errors_convert() {
        let err: DbError = ValidationError::Empty { field: "name" }.into();
        assert!(matches!(err, DbError::Validation(_)));
        assert_eq!(err.to_string(), "invalid input: name cannot be empty");
    }
}
