use pinrex_core::{NameInput, NameKind, NameRecord, make_name_searchable};
use rusqlite::{OptionalExtension, params};

use super::{Storage, collect_rows, get_conn};
use crate::error::StorageError;

fn select_names(kind: NameKind) -> String {
    format!(
        "SELECT id, {owner}, name, search_name, naming_convention, notes FROM {table}",
        owner = kind.owner_column(),
        table = kind.table(),
    )
}

fn row_to_name(kind: NameKind, row: &rusqlite::Row<'_>) -> rusqlite::Result<NameRecord> {
    Ok(NameRecord {
        id: row.get(0)?,
        kind,
        owner_id: row.get(1)?,
        name: row.get(2)?,
        search_name: row.get(3)?,
        naming_convention: row.get(4)?,
        notes: row.get(5)?,
    })
}

impl Storage {
    /// Insert a name record for a chemical, polymer or solvent.
    ///
    /// # Errors
    /// Returns `Constraint` if the owner does not exist.
    pub fn add_name(&self, kind: NameKind, input: &NameInput) -> Result<NameRecord, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            &format!(
                "INSERT INTO {} ({}, name, search_name, naming_convention, notes)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                kind.table(),
                kind.owner_column()
            ),
            params![
                input.owner_id(),
                input.name(),
                input.search_name(),
                input.naming_convention(),
                input.notes()
            ],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(%kind, id, search_name = input.search_name(), "name added");
        Ok(NameRecord {
            id,
            kind,
            owner_id: input.owner_id(),
            name: input.name().to_owned(),
            search_name: input.search_name().to_owned(),
            naming_convention: input.naming_convention().map(ToOwned::to_owned),
            notes: input.notes().map(ToOwned::to_owned),
        })
    }

    /// Get a name record by id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_name(&self, kind: NameKind, id: i64) -> Result<Option<NameRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let record = conn
            .query_row(&format!("{} WHERE id = ?1", select_names(kind)), params![id], |row| {
                row_to_name(kind, row)
            })
            .optional()?;
        Ok(record)
    }

    /// Names whose search key equals the normalized `query`.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn find_names(&self, kind: NameKind, query: &str) -> Result<Vec<NameRecord>, StorageError> {
        let key = make_name_searchable(query);
        let conn = get_conn(&self.pool)?;
        let mut stmt =
            conn.prepare(&format!("{} WHERE search_name = ?1 ORDER BY id", select_names(kind)))?;
        let rows = stmt.query_map(params![key], |row| row_to_name(kind, row))?;
        collect_rows(rows)
    }

    /// Every name of one chemical, polymer or solvent.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn names_for_owner(
        &self,
        kind: NameKind,
        owner_id: i64,
    ) -> Result<Vec<NameRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "{} WHERE {} = ?1 ORDER BY id",
            select_names(kind),
            kind.owner_column()
        ))?;
        let rows = stmt.query_map(params![owner_id], |row| row_to_name(kind, row))?;
        collect_rows(rows)
    }

    /// Replace the raw name of a record, recomputing its search key.
    ///
    /// # Errors
    /// Returns `NotFound` if no record has this id.
    pub fn rename_name(
        &self,
        kind: NameKind,
        id: i64,
        raw_name: &str,
    ) -> Result<NameRecord, StorageError> {
        let search_name = make_name_searchable(raw_name);
        let conn = get_conn(&self.pool)?;
        let affected = conn.execute(
            &format!("UPDATE {} SET name = ?1, search_name = ?2 WHERE id = ?3", kind.table()),
            params![raw_name, search_name, id],
        )?;
        if affected == 0 {
            return Err(StorageError::not_found(kind.table(), id));
        }
        let record = conn.query_row(
            &format!("{} WHERE id = ?1", select_names(kind)),
            params![id],
            |row| row_to_name(kind, row),
        )?;
        tracing::debug!(%kind, id, search_name = %record.search_name, "name renamed");
        Ok(record)
    }

    /// Delete a name record. Returns `true` if a row was deleted.
    ///
    /// # Errors
    /// Returns error if database delete fails.
    pub fn delete_name(&self, kind: NameKind, id: i64) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let affected =
            conn.execute(&format!("DELETE FROM {} WHERE id = ?1", kind.table()), params![id])?;
        Ok(affected > 0)
    }
}
