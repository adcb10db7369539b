//! NameStore implementation for PgStorage.

use super::*;

use crate::traits::NameStore;
use async_trait::async_trait;
use pinrex_core::{NameInput, make_name_searchable};

#[async_trait]
impl NameStore for PgStorage {
    async fn add_name(&self, kind: NameKind, input: &NameInput) -> Result<NameRecord, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO {} ({}, name, search_name, naming_convention, notes)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {}",
            kind.table(),
            kind.owner_column(),
            name_columns(kind)
        ))
        .bind(input.owner_id())
        .bind(input.name())
        .bind(input.search_name())
        .bind(input.naming_convention())
        .bind(input.notes())
        .fetch_one(&self.pool)
        .await?;
        let record = row_to_name(kind, &row)?;
        tracing::debug!(%kind, id = record.id, search_name = %record.search_name, "name added");
        Ok(record)
    }

    async fn get_name(&self, kind: NameKind, id: i64) -> Result<Option<NameRecord>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM {} WHERE id = $1",
            name_columns(kind),
            kind.table()
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_name(kind, &r)).transpose()
    }

    async fn find_names(
        &self,
        kind: NameKind,
        query: &str,
    ) -> Result<Vec<NameRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM {} WHERE search_name = $1 ORDER BY id",
            name_columns(kind),
            kind.table()
        ))
        .bind(make_name_searchable(query))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(|r| row_to_name(kind, r)).collect()
    }

    async fn names_for_owner(
        &self,
        kind: NameKind,
        owner_id: i64,
    ) -> Result<Vec<NameRecord>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM {} WHERE {} = $1 ORDER BY id",
            name_columns(kind),
            kind.table(),
            kind.owner_column()
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(|r| row_to_name(kind, r)).collect()
    }

    async fn rename_name(
        &self,
        kind: NameKind,
        id: i64,
        raw_name: &str,
    ) -> Result<NameRecord, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE {} SET name = $1, search_name = $2 WHERE id = $3 RETURNING {}",
            kind.table(),
            name_columns(kind)
        ))
        .bind(raw_name)
        .bind(make_name_searchable(raw_name))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(r) => row_to_name(kind, &r),
            None => Err(StorageError::not_found(kind.table(), id)),
        }
    }

    async fn delete_name(&self, kind: NameKind, id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", kind.table()))
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
