use chrono::Utc;
use pinrex_core::{SolubilityData, SolubilityDataInput, Solvent, SolventInput, make_name_searchable};
use rusqlite::{OptionalExtension, params};

use super::{Storage, collect_rows, get_conn, json_text, parse_json_opt, parse_timestamp};
use crate::error::StorageError;

const SOLVENT_COLUMNS: &str = "s.id, s.smiles, s.fingerprint, s.map4_fingerprint";

fn row_to_solvent(row: &rusqlite::Row<'_>) -> rusqlite::Result<Solvent> {
    Ok(Solvent {
        id: row.get(0)?,
        smiles: row.get(1)?,
        fingerprint: parse_json_opt(row.get(2)?)?,
        map4_fingerprint: parse_json_opt(row.get(3)?)?,
    })
}

fn row_to_solubility(row: &rusqlite::Row<'_>) -> rusqlite::Result<SolubilityData> {
    let date_added: String = row.get(2)?;
    let date_of_test: Option<String> = row.get(6)?;
    Ok(SolubilityData {
        id: row.get(0)?,
        reference: row.get(1)?,
        date_added: parse_timestamp(&date_added)?,
        pol_id: row.get(3)?,
        sol_id: row.get(4)?,
        solubility: row.get(5)?,
        date_of_test: date_of_test.as_deref().map(parse_timestamp).transpose()?,
        temp_min: row.get(7)?,
        temp_max: row.get(8)?,
        pdi_min: row.get(9)?,
        pdi_max: row.get(10)?,
        pol_mw_min: row.get(11)?,
        pol_mw_max: row.get(12)?,
        pol_mw_type: row.get(13)?,
        conc_mg_per_ml: row.get(14)?,
        csst_file_id: row.get(15)?,
    })
}

impl Storage {
    /// Insert a solvent.
    ///
    /// # Errors
    /// Returns `Duplicate` if the SMILES is already stored.
    pub fn save_solvent(&self, input: &SolventInput) -> Result<Solvent, StorageError> {
        let fingerprint = json_text(input.fingerprint.as_ref())?;
        let map4_fingerprint = json_text(input.map4_fingerprint.as_ref())?;
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO solvents (smiles, fingerprint, map4_fingerprint) VALUES (?1, ?2, ?3)",
            params![input.smiles, fingerprint, map4_fingerprint],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, smiles = %input.smiles, "solvent saved");
        Ok(Solvent {
            id,
            smiles: input.smiles.clone(),
            fingerprint: input.fingerprint.clone(),
            map4_fingerprint: input.map4_fingerprint.clone(),
        })
    }

    /// Get solvent by id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_solvent(&self, id: i64) -> Result<Option<Solvent>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let solvent = conn
            .query_row(
                &format!("SELECT {SOLVENT_COLUMNS} FROM solvents s WHERE s.id = ?1"),
                params![id],
                row_to_solvent,
            )
            .optional()?;
        Ok(solvent)
    }

    /// Get solvent by exact SMILES.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_solvent_by_smiles(&self, smiles: &str) -> Result<Option<Solvent>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let solvent = conn
            .query_row(
                &format!("SELECT {SOLVENT_COLUMNS} FROM solvents s WHERE s.smiles = ?1"),
                params![smiles],
                row_to_solvent,
            )
            .optional()?;
        Ok(solvent)
    }

    /// Solvents having a name that normalizes like `query`.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn find_solvents_by_name(&self, query: &str) -> Result<Vec<Solvent>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT DISTINCT {SOLVENT_COLUMNS}
               FROM solvents s JOIN solvent_names n ON n.sol_id = s.id
              WHERE n.search_name = ?1 ORDER BY s.id"
        ))?;
        let rows = stmt.query_map(params![make_name_searchable(query)], row_to_solvent)?;
        collect_rows(rows)
    }

    /// Record a polymer/solvent solubility observation.
    ///
    /// # Errors
    /// Returns `Constraint` if the polymer, solvent or CSST file does not exist.
    pub fn add_solubility_data(
        &self,
        input: &SolubilityDataInput,
    ) -> Result<SolubilityData, StorageError> {
        let date_added = Utc::now();
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO solubility_data
               (reference, date_added, pol_id, sol_id, solubility, date_of_test, temp_min, temp_max,
                pdi_min, pdi_max, pol_mw_min, pol_mw_max, pol_mw_type, conc_mg_per_ml, csst_file_id)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)",
            params![
                input.reference,
                date_added.to_rfc3339(),
                input.pol_id,
                input.sol_id,
                input.solubility,
                input.date_of_test.map(|d| d.to_rfc3339()),
                input.temp_min,
                input.temp_max,
                input.pdi_min,
                input.pdi_max,
                input.pol_mw_min,
                input.pol_mw_max,
                input.pol_mw_type,
                input.conc_mg_per_ml,
                input.csst_file_id,
            ],
        )?;
        Ok(SolubilityData {
            id: conn.last_insert_rowid(),
            reference: input.reference.clone(),
            date_added,
            pol_id: input.pol_id,
            sol_id: input.sol_id,
            solubility: input.solubility.clone(),
            date_of_test: input.date_of_test,
            temp_min: input.temp_min,
            temp_max: input.temp_max,
            pdi_min: input.pdi_min,
            pdi_max: input.pdi_max,
            pol_mw_min: input.pol_mw_min,
            pol_mw_max: input.pol_mw_max,
            pol_mw_type: input.pol_mw_type.clone(),
            conc_mg_per_ml: input.conc_mg_per_ml,
            csst_file_id: input.csst_file_id,
        })
    }

    /// Solubility observations for a polymer.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn solubility_for_polymer(&self, pol_id: i64) -> Result<Vec<SolubilityData>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, reference, date_added, pol_id, sol_id, solubility, date_of_test, temp_min, temp_max,
                    pdi_min, pdi_max, pol_mw_min, pol_mw_max, pol_mw_type, conc_mg_per_ml, csst_file_id
               FROM solubility_data WHERE pol_id = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![pol_id], row_to_solubility)?;
        collect_rows(rows)
    }
}
