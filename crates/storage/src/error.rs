//! Typed error enum for the storage layer.
//!
//! Callers match on the failure mode (not found, duplicate natural key,
//! rejected by a store constraint) instead of downcasting opaque errors.

use pinrex_core::CoreError;
use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unique or primary-key violation (natural key already present).
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// CHECK, FOREIGN KEY or NOT NULL violation: the store rejected the data.
    #[error("constraint violation: {0}")]
    Constraint(String),

    /// Input refused before it reached the store.
    #[error("invalid input: {0}")]
    Invalid(#[from] CoreError),

    /// SQLite failure.
    #[cfg(feature = "sqlite")]
    #[error("sqlite error: {0}")]
    Sqlite(#[source] rusqlite::Error),

    /// SQLite connection pool failure.
    #[cfg(feature = "sqlite")]
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// PostgreSQL / connection / timeout failure.
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Row data could not be deserialized into domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),

    /// Blocking task failed to complete.
    #[error("blocking task failed: {0}")]
    Join(String),
}

impl StorageError {
    /// Whether this error is a unique-constraint violation.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }

    /// Whether the store rejected the data (CHECK / FOREIGN KEY / NOT NULL).
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound { entity, id: id.to_string() }
    }

    pub(crate) fn corrupt(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DataCorruption { context: context.into(), source: Box::new(source) }
    }
}

/// Custom `From<rusqlite::Error>` — NOT blanket `#[from]`.
///
/// - `QueryReturnedNoRows` → `NotFound`
/// - UNIQUE / PRIMARY KEY violations → `Duplicate`
/// - other constraint violations → `Constraint`
/// - Everything else → `Sqlite`
#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        use rusqlite::ffi;

        match &err {
            rusqlite::Error::QueryReturnedNoRows => Self::not_found("row", "unknown"),
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                let message = message.clone().unwrap_or_else(|| err.to_string());
                match code.extended_code {
                    ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                        Self::Duplicate(message)
                    },
                    _ => Self::Constraint(message),
                }
            },
            _ => Self::Sqlite(err),
        }
    }
}

/// Custom `From<sqlx::Error>` — NOT blanket `#[from]`.
///
/// - `RowNotFound` → `NotFound`
/// - SQLSTATE 23505 → `Duplicate`
/// - SQLSTATE 23502 / 23503 / 23514 / 22P02 → `Constraint`
/// - Everything else → `Database`
#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::not_found("row", "unknown"),
            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some("23505") => Self::Duplicate(db_err.message().to_owned()),
                Some("23502" | "23503" | "23514" | "22P02") => {
                    Self::Constraint(db_err.message().to_owned())
                },
                _ => Self::Database(err),
            },
            _ => Self::Database(err),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::corrupt("JSON serialization/deserialization", err)
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Join(err.to_string())
    }
}
