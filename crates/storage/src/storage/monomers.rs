use pinrex_core::{Monomer, MonomerInput, Smarts, SmartsInput};
use rusqlite::{OptionalExtension, params};

use super::{Storage, collect_rows, get_conn};
use crate::error::StorageError;

pub(super) const SMARTS_COLUMNS: &str = "s.id, s.name, s.smarts, s.description, s.reference";

pub(super) fn row_to_smarts(row: &rusqlite::Row<'_>) -> rusqlite::Result<Smarts> {
    Ok(Smarts {
        id: row.get(0)?,
        name: row.get(1)?,
        smarts: row.get(2)?,
        description: row.get(3)?,
        reference: row.get(4)?,
    })
}

fn row_to_monomer(row: &rusqlite::Row<'_>) -> rusqlite::Result<Monomer> {
    Ok(Monomer {
        id: row.get(0)?,
        smiles: row.get(1)?,
        reference_id: row.get(2)?,
        reference: row.get(3)?,
    })
}

impl Storage {
    /// Insert a monomer.
    ///
    /// # Errors
    /// Returns `Duplicate` if the SMILES is already stored.
    pub fn save_monomer(&self, input: &MonomerInput) -> Result<Monomer, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO monomers (smiles, reference_id, reference) VALUES (?1, ?2, ?3)",
            params![input.smiles, input.reference_id, input.reference],
        )?;
        Ok(Monomer {
            id: conn.last_insert_rowid(),
            smiles: input.smiles.clone(),
            reference_id: input.reference_id.clone(),
            reference: input.reference.clone(),
        })
    }

    /// Get monomer by id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_monomer(&self, id: i64) -> Result<Option<Monomer>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let monomer = conn
            .query_row(
                "SELECT id, smiles, reference_id, reference FROM monomers WHERE id = ?1",
                params![id],
                row_to_monomer,
            )
            .optional()?;
        Ok(monomer)
    }

    /// Get monomer by exact SMILES.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_monomer_by_smiles(&self, smiles: &str) -> Result<Option<Monomer>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let monomer = conn
            .query_row(
                "SELECT id, smiles, reference_id, reference FROM monomers WHERE smiles = ?1",
                params![smiles],
                row_to_monomer,
            )
            .optional()?;
        Ok(monomer)
    }

    /// Insert a SMARTS pattern.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn save_smarts(&self, input: &SmartsInput) -> Result<Smarts, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO smarts (name, smarts, description, reference) VALUES (?1, ?2, ?3, ?4)",
            params![input.name, input.smarts, input.description, input.reference],
        )?;
        Ok(Smarts {
            id: conn.last_insert_rowid(),
            name: input.name.clone(),
            smarts: input.smarts.clone(),
            description: input.description.clone(),
            reference: input.reference.clone(),
        })
    }

    /// Get SMARTS pattern by id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_smarts(&self, id: i64) -> Result<Option<Smarts>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let smarts = conn
            .query_row(
                &format!("SELECT {SMARTS_COLUMNS} FROM smarts s WHERE s.id = ?1"),
                params![id],
                row_to_smarts,
            )
            .optional()?;
        Ok(smarts)
    }

    /// Mark a monomer as containing a SMARTS substructure.
    ///
    /// # Errors
    /// Returns `Duplicate` if already linked, `Constraint` if either side is missing.
    pub fn link_monomer_substructure(
        &self,
        monomer_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO monomer_substructures (smarts_id, monomer_id) VALUES (?1, ?2)",
            params![smarts_id, monomer_id],
        )?;
        Ok(())
    }

    /// SMARTS substructures linked to a monomer.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn monomer_substructures(&self, monomer_id: i64) -> Result<Vec<Smarts>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SMARTS_COLUMNS} FROM smarts s
               JOIN monomer_substructures ms ON ms.smarts_id = s.id
              WHERE ms.monomer_id = ?1 ORDER BY s.id"
        ))?;
        let rows = stmt.query_map(params![monomer_id], row_to_smarts)?;
        collect_rows(rows)
    }
}
