//! Shared constants for pinrex.

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default size of the SQLite connection pool.
pub const SQLITE_POOL_SIZE: u32 = 8;

/// SQLite busy timeout in milliseconds.
pub const SQLITE_BUSY_TIMEOUT_MS: u32 = 30_000;

/// Naming convention recorded when the caller does not know one.
pub const UNKNOWN_NAMING_CONVENTION: &str = "unknown";
