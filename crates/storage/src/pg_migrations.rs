//! PostgreSQL schema setup and teardown.
//!
//! Applied versions are recorded in `schema_version`, one row per migration.

use sqlx::PgPool;

use crate::error::StorageError;
use crate::schema::Schema;

/// Highest applied schema version, 0 on an empty database.
pub async fn pg_schema_version(pool: &PgPool) -> Result<i32, StorageError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
    )
    .execute(pool)
    .await?;
    let version: Option<i32> = sqlx::query_scalar("SELECT MAX(version) FROM schema_version")
        .fetch_one(pool)
        .await?;
    Ok(version.unwrap_or(0))
}

/// Apply every migration of `schema` newer than the recorded version.
pub async fn run_pg_migrations(pool: &PgPool, schema: &Schema) -> Result<(), StorageError> {
    let current_version = pg_schema_version(pool).await?;

    tracing::info!(
        "PostgreSQL schema version: {} (target: {})",
        current_version,
        schema.version()
    );

    for migration in schema.pending(current_version) {
        tracing::info!("Running migration v{}: {}", migration.version, migration.description);
        let mut tx = pool.begin().await?;
        sqlx::raw_sql(migration.postgres).execute(&mut *tx).await?;
        sqlx::query("INSERT INTO schema_version (version) VALUES ($1)")
            .bind(migration.version)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
    }

    tracing::info!("PostgreSQL schema up to date (version {})", schema.version());
    Ok(())
}

/// Drop every table of `schema` and forget the applied versions.
pub async fn teardown_pg(pool: &PgPool, schema: &Schema) -> Result<(), StorageError> {
    let mut tx = pool.begin().await?;
    for table in schema.teardown_order() {
        tracing::debug!(table, "dropping table");
        sqlx::query(&format!("DROP TABLE IF EXISTS {table} CASCADE")).execute(&mut *tx).await?;
    }
    sqlx::query("DROP TABLE IF EXISTS schema_version").execute(&mut *tx).await?;
    tx.commit().await?;
    tracing::info!("PostgreSQL schema dropped");
    Ok(())
}
