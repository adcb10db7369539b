use async_trait::async_trait;
use pinrex_core::{NameInput, NameKind, NameRecord};

use crate::error::StorageError;

/// Name records of chemicals, polymers and solvents.
#[async_trait]
pub trait NameStore: Send + Sync {
    /// Insert a name built by `make_name_record`.
    async fn add_name(&self, kind: NameKind, input: &NameInput) -> Result<NameRecord, StorageError>;

    /// Get name record by ID.
    async fn get_name(&self, kind: NameKind, id: i64) -> Result<Option<NameRecord>, StorageError>;

    /// Normalize `query` and return the records whose search key equals it.
    async fn find_names(&self, kind: NameKind, query: &str)
    -> Result<Vec<NameRecord>, StorageError>;

    /// All names of one owner.
    async fn names_for_owner(
        &self,
        kind: NameKind,
        owner_id: i64,
    ) -> Result<Vec<NameRecord>, StorageError>;

    /// Replace the raw name; the search key is recomputed with it.
    async fn rename_name(
        &self,
        kind: NameKind,
        id: i64,
        raw_name: &str,
    ) -> Result<NameRecord, StorageError>;

    /// Delete name record. Returns `true` if a row was deleted.
    async fn delete_name(&self, kind: NameKind, id: i64) -> Result<bool, StorageError>;
}
