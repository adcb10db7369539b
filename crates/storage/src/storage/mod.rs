//! `SQLite` storage implementation
//!
//! Synchronous methods grouped by catalog area. The async store traits are
//! implemented on top of these in `sqlite_async.rs`.

mod chemicals;
mod lab;
mod monomers;
mod names;
mod polymers;
mod reactions;
mod solvents;
mod stats;
mod toxicity;

use std::path::Path;

use chrono::{DateTime, Utc};
use pinrex_core::{SQLITE_BUSY_TIMEOUT_MS, SQLITE_POOL_SIZE, env_parse_with_default};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StorageError;
use crate::migrations;
use crate::schema::Schema;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Serialize an optional JSON column.
pub(crate) fn json_text<T: Serialize>(value: Option<&T>) -> Result<Option<String>, StorageError> {
    value.map(serde_json::to_string).transpose().map_err(StorageError::from)
}

/// Parse an optional JSON column, converting failure to a rusqlite error.
pub(crate) fn parse_json_opt<T: DeserializeOwned>(s: Option<String>) -> rusqlite::Result<Option<T>> {
    s.map(|s| serde_json::from_str(&s))
        .transpose()
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Parse a JSON array column, treating NULL as empty.
pub(crate) fn parse_json_vec<T: DeserializeOwned>(s: Option<String>) -> rusqlite::Result<Vec<T>> {
    Ok(parse_json_opt(s)?.unwrap_or_default())
}

/// Parse an RFC 3339 timestamp column.
pub(crate) fn parse_timestamp(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Parse an enum tag column through `FromStr`.
pub(crate) fn parse_tag<T>(s: &str) -> rusqlite::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.parse().map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Collect mapped rows, logging and failing on the first bad row.
pub(crate) fn collect_rows<T>(
    rows: impl Iterator<Item = rusqlite::Result<T>>,
) -> Result<Vec<T>, StorageError> {
    rows.map(|row| {
        row.map_err(|e| {
            tracing::warn!("Row read error: {}", e);
            StorageError::from(e)
        })
    })
    .collect()
}

/// Custom connection initializer for integrity and concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(&format!(
        "PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS};
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;"
    ))?;
    Ok(())
}

fn db_pool_size() -> u32 {
    env_parse_with_default("PINREX_DB_POOL_SIZE", SQLITE_POOL_SIZE)
}

impl Storage {
    /// Open (or create) the database at `db_path` with the current schema.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or migrations fail.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        Self::open(db_path, &Schema::current())
    }

    /// Open (or create) the database at `db_path`, bringing it to `schema`.
    ///
    /// # Errors
    /// Returns error if the pool cannot be built or migrations fail.
    pub fn open(db_path: &Path, schema: &Schema) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = db_pool_size();
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let mut conn = pool.get()?;
        migrations::run_migrations(&mut conn, schema)
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::info!(pool_size = pool_size, "Storage initialized with connection pool");

        Ok(Self { pool })
    }

    /// Schema version recorded in the database.
    ///
    /// # Errors
    /// Returns error if the pragma cannot be read.
    pub fn schema_version(&self) -> Result<i32, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(migrations::schema_version(&conn)?)
    }

    /// Bring the database up to `schema`.
    ///
    /// # Errors
    /// Returns error if a migration fails.
    pub fn setup(&self, schema: &Schema) -> Result<(), StorageError> {
        let mut conn = get_conn(&self.pool)?;
        migrations::run_migrations(&mut conn, schema)
            .map_err(|e| StorageError::Migration(e.to_string()))
    }

    /// Drop every table of `schema`.
    ///
    /// # Errors
    /// Returns error if a table cannot be dropped.
    pub fn teardown(&self, schema: &Schema) -> Result<(), StorageError> {
        let mut conn = get_conn(&self.pool)?;
        migrations::teardown(&mut conn, schema).map_err(|e| StorageError::Migration(e.to_string()))
    }
}
