use pinrex_core::{
    Chemical, ChemicalCost, ChemicalCostInput, ChemicalInput, ChemicalSupplier, Smarts,
    make_name_searchable,
};
use rusqlite::{OptionalExtension, params};

use super::monomers::{SMARTS_COLUMNS, row_to_smarts};
use super::{Storage, collect_rows, get_conn, parse_timestamp};
use crate::error::StorageError;

fn row_to_chemical(row: &rusqlite::Row<'_>) -> rusqlite::Result<Chemical> {
    Ok(Chemical { id: row.get(0)?, smiles: row.get(1)?, cas: row.get(2)? })
}

fn row_to_cost(row: &rusqlite::Row<'_>) -> rusqlite::Result<ChemicalCost> {
    let datetime: String = row.get(8)?;
    Ok(ChemicalCost {
        id: row.get(0)?,
        chemical_id: row.get(1)?,
        supplier_id: row.get(2)?,
        cost: row.get(3)?,
        cost_unit: row.get(4)?,
        amount: row.get(5)?,
        amount_unit: row.get(6)?,
        usd_cost_per_gram: row.get(7)?,
        datetime: parse_timestamp(&datetime)?,
        note: row.get(9)?,
    })
}

impl Storage {
    /// Insert a chemical.
    ///
    /// # Errors
    /// Returns `Duplicate` if the SMILES is already stored.
    pub fn save_chemical(&self, input: &ChemicalInput) -> Result<Chemical, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO chemicals (smiles, cas) VALUES (?1, ?2)",
            params![input.smiles, input.cas],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, smiles = %input.smiles, "chemical saved");
        Ok(Chemical { id, smiles: input.smiles.clone(), cas: input.cas.clone() })
    }

    /// Get chemical by id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_chemical(&self, id: i64) -> Result<Option<Chemical>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let chemical = conn
            .query_row(
                "SELECT id, smiles, cas FROM chemicals WHERE id = ?1",
                params![id],
                row_to_chemical,
            )
            .optional()?;
        Ok(chemical)
    }

    /// Get chemical by exact SMILES.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_chemical_by_smiles(&self, smiles: &str) -> Result<Option<Chemical>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let chemical = conn
            .query_row(
                "SELECT id, smiles, cas FROM chemicals WHERE smiles = ?1",
                params![smiles],
                row_to_chemical,
            )
            .optional()?;
        Ok(chemical)
    }

    /// Chemicals having a name that normalizes like `query`.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn find_chemicals_by_name(&self, query: &str) -> Result<Vec<Chemical>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT DISTINCT c.id, c.smiles, c.cas
               FROM chemicals c JOIN chemical_names n ON n.chemical_id = c.id
              WHERE n.search_name = ?1 ORDER BY c.id",
        )?;
        let rows = stmt.query_map(params![make_name_searchable(query)], row_to_chemical)?;
        collect_rows(rows)
    }

    /// Insert a supplier.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn add_supplier(
        &self,
        name: &str,
        site: Option<&str>,
    ) -> Result<ChemicalSupplier, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO chemical_suppliers (name, site) VALUES (?1, ?2)",
            params![name, site],
        )?;
        Ok(ChemicalSupplier {
            id: conn.last_insert_rowid(),
            name: name.to_owned(),
            site: site.map(ToOwned::to_owned),
        })
    }

    /// Record a purchase cost.
    ///
    /// # Errors
    /// Returns `Constraint` if the chemical or supplier does not exist.
    pub fn add_chemical_cost(&self, input: &ChemicalCostInput) -> Result<ChemicalCost, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO chemical_costs
               (chemical_id, supplier_id, cost, cost_unit, amount, amount_unit, usd_cost_per_gram, datetime, note)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                input.chemical_id,
                input.supplier_id,
                input.cost,
                input.cost_unit,
                input.amount,
                input.amount_unit,
                input.usd_cost_per_gram,
                input.datetime.to_rfc3339(),
                input.note,
            ],
        )?;
        Ok(ChemicalCost {
            id: conn.last_insert_rowid(),
            chemical_id: input.chemical_id,
            supplier_id: input.supplier_id,
            cost: input.cost,
            cost_unit: input.cost_unit.clone(),
            amount: input.amount,
            amount_unit: input.amount_unit.clone(),
            usd_cost_per_gram: input.usd_cost_per_gram,
            datetime: input.datetime,
            note: input.note.clone(),
        })
    }

    /// Costs recorded for a chemical, oldest first.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn chemical_costs(&self, chemical_id: i64) -> Result<Vec<ChemicalCost>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, chemical_id, supplier_id, cost, cost_unit, amount, amount_unit, usd_cost_per_gram, datetime, note
               FROM chemical_costs WHERE chemical_id = ?1 ORDER BY datetime, id",
        )?;
        let rows = stmt.query_map(params![chemical_id], row_to_cost)?;
        collect_rows(rows)
    }

    /// Mark a chemical as containing a SMARTS substructure.
    ///
    /// # Errors
    /// Returns `Duplicate` if already linked, `Constraint` if either side is missing.
    pub fn link_chemical_substructure(
        &self,
        chemical_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO chemical_substructures (smarts_id, chemical_id) VALUES (?1, ?2)",
            params![smarts_id, chemical_id],
        )?;
        Ok(())
    }

    /// SMARTS substructures linked to a chemical.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn chemical_substructures(&self, chemical_id: i64) -> Result<Vec<Smarts>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {SMARTS_COLUMNS} FROM smarts s
               JOIN chemical_substructures cs ON cs.smarts_id = s.id
              WHERE cs.chemical_id = ?1 ORDER BY s.id"
        ))?;
        let rows = stmt.query_map(params![chemical_id], row_to_smarts)?;
        collect_rows(rows)
    }
}
