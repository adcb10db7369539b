//! SQLite schema setup and teardown.
//!
//! The applied version lives in the `user_version` pragma.

use rusqlite::Connection;

use crate::schema::Schema;

/// Read the schema version recorded in the database file.
pub fn schema_version(conn: &Connection) -> Result<i32, rusqlite::Error> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

/// Apply every migration of `schema` newer than the recorded version.
///
/// Each migration runs in its own transaction together with the version bump.
pub fn run_migrations(conn: &mut Connection, schema: &Schema) -> Result<(), rusqlite::Error> {
    let current_version = schema_version(conn)?;

    tracing::info!("Database schema version: {} (target: {})", current_version, schema.version());

    for migration in schema.pending(current_version) {
        tracing::info!("Running migration v{}: {}", migration.version, migration.description);
        let tx = conn.transaction()?;
        tx.execute_batch(migration.sqlite)?;
        tx.pragma_update(None, "user_version", migration.version)?;
        tx.commit()?;
    }

    tracing::info!("Database schema up to date (version {})", schema.version());
    Ok(())
}

/// Drop every table of `schema` and reset the recorded version.
pub fn teardown(conn: &mut Connection, schema: &Schema) -> Result<(), rusqlite::Error> {
    let tx = conn.transaction()?;
    for table in schema.teardown_order() {
        tracing::debug!(table, "dropping table");
        tx.execute_batch(&format!("DROP TABLE IF EXISTS {table}"))?;
    }
    tx.pragma_update(None, "user_version", 0i32)?;
    tx.commit()?;
    tracing::info!("Database schema dropped");
    Ok(())
}
