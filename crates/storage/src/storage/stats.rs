use pinrex_core::NameKind;

use super::{Storage, get_conn};
use crate::error::StorageError;
use crate::types::{COUNTED_TABLES, CatalogStats};

fn count_rows(conn: &rusqlite::Connection, table: &str) -> Result<u64, StorageError> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))?;
    Ok(u64::try_from(count).unwrap_or_default())
}

impl Storage {
    /// Row counts of the main catalog tables.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_stats(&self) -> Result<CatalogStats, StorageError> {
        let conn = get_conn(&self.pool)?;
        let counts = COUNTED_TABLES
            .iter()
            .map(|table| count_rows(&conn, table))
            .collect::<Result<Vec<_>, _>>()?;
        let mut name_count = 0;
        for kind in NameKind::ALL {
            name_count += count_rows(&conn, kind.table())?;
        }
        Ok(CatalogStats::from_counts(&counts, name_count))
    }
}
