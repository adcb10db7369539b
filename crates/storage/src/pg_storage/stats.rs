//! StatsStore implementation for PgStorage.

use super::*;

use crate::traits::StatsStore;
use crate::types::{COUNTED_TABLES, CatalogStats};
use async_trait::async_trait;

impl PgStorage {
    async fn count_rows(&self, table: &str) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await?;
        Ok(count_to_u64(count))
    }
}

#[async_trait]
impl StatsStore for PgStorage {
    async fn get_stats(&self) -> Result<CatalogStats, StorageError> {
        let mut counts = Vec::with_capacity(COUNTED_TABLES.len());
        for table in COUNTED_TABLES {
            counts.push(self.count_rows(table).await?);
        }
        let mut name_count = 0;
        for kind in NameKind::ALL {
            name_count += self.count_rows(kind.table()).await?;
        }
        Ok(CatalogStats::from_counts(&counts, name_count))
    }
}
