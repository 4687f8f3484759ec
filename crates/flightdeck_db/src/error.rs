//! Error types for the database layer.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Database error types.
#[derive(Debug, Error, Diagnostic)]
pub enum DbError {
    /// SQLite/sqlx error
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database file does not exist
    #[error("Database file not found: {path}")]
    #[diagnostic(help("Pass the location of the flights dataset with --db"))]
    DatabaseMissing { path: PathBuf },

    /// Date input that does not parse as YYYY-MM-DD
    #[error("Invalid date: {input} (expected YYYY-MM-DD)")]
    InvalidDate { input: String },
}

impl DbError {
    /// Create a missing-database error.
    pub fn database_missing(path: impl Into<PathBuf>) -> Self {
        Self::DatabaseMissing { path: path.into() }
    }

    /// Create an invalid-date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
        }
    }
}
