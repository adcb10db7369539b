use async_trait::async_trait;

use crate::error::StorageError;
use crate::types::CatalogStats;

/// Catalog statistics.
#[async_trait]
pub trait StatsStore: Send + Sync {
    /// Row counts of the main catalog tables.
    async fn get_stats(&self) -> Result<CatalogStats, StorageError>;
}
