//! # Database Error Types
//!
//! Classification of storage failures below the store contract.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Error Propagation                              │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← adds categorization                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError::Persistence ← what store callers see                   │
//! │                                                                     │
//! │  Note: StoreError::NotFound is decided in the repository from       │
//! │  rows_affected, not mapped from a sqlx error.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use shelf_core::StoreError;

/// Database operation errors.
///
/// These wrap sqlx errors with enough categorization for logs and
/// diagnostics. They never cross the store boundary directly; the
/// `From<DbError> for StoreError` impl below flattens them into the
/// caller-visible contract.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// File can't be created, permissions, disk full, pool closed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("pool is closed".to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Every database failure surfaces to store callers as a persistence
/// failure, message carried through unmodified.
impl From<DbError> for StoreError {
    fn from(err: DbError) -> Self {
        StoreError::Persistence(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
