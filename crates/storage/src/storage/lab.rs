use chrono::Utc;
use pinrex_core::{
    CsstFile, CsstFileInput, LabMaterial, LabMaterialRef, PackagingWaste, PackagingWasteInput,
};
use rusqlite::{OptionalExtension, params};

use super::{Storage, get_conn, parse_json_vec, parse_timestamp};
use crate::error::StorageError;

fn row_to_csst_file(row: &rusqlite::Row<'_>) -> rusqlite::Result<CsstFile> {
    let date_added: String = row.get(6)?;
    let start_of_experiment: String = row.get(8)?;
    Ok(CsstFile {
        id: row.get(0)?,
        file_name: row.get(1)?,
        original_name: row.get(2)?,
        polymers: parse_json_vec(row.get(3)?)?,
        solvents: parse_json_vec(row.get(4)?)?,
        concentrations: parse_json_vec(row.get(5)?)?,
        date_added: parse_timestamp(&date_added)?,
        stir_rate: row.get(7)?,
        start_of_experiment: parse_timestamp(&start_of_experiment)?,
        version: row.get(9)?,
        project: row.get(10)?,
    })
}

impl Storage {
    /// Insert a CSST (Crystal16) file record.
    ///
    /// # Errors
    /// Returns `Duplicate` if the file name is taken.
    pub fn save_csst_file(&self, input: &CsstFileInput) -> Result<CsstFile, StorageError> {
        let polymers = serde_json::to_string(&input.polymers)?;
        let solvents = serde_json::to_string(&input.solvents)?;
        let concentrations = serde_json::to_string(&input.concentrations)?;
        let date_added = Utc::now();
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO csst_files
               (file_name, original_name, polymers, solvents, concentrations, date_added, stir_rate,
                start_of_experiment, version, project)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                input.file_name,
                input.original_name,
                polymers,
                solvents,
                concentrations,
                date_added.to_rfc3339(),
                input.stir_rate,
                input.start_of_experiment.to_rfc3339(),
                input.version,
                input.project,
            ],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, file_name = %input.file_name, "CSST file saved");
        Ok(CsstFile {
            id,
            file_name: input.file_name.clone(),
            original_name: input.original_name.clone(),
            polymers: input.polymers.clone(),
            solvents: input.solvents.clone(),
            concentrations: input.concentrations.clone(),
            date_added,
            stir_rate: input.stir_rate,
            start_of_experiment: input.start_of_experiment,
            version: input.version.clone(),
            project: input.project.clone(),
        })
    }

    /// Get CSST file by stored file name.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_csst_file(&self, file_name: &str) -> Result<Option<CsstFile>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let file = conn
            .query_row(
                "SELECT id, file_name, original_name, polymers, solvents, concentrations, date_added,
                        stir_rate, start_of_experiment, version, project
                   FROM csst_files WHERE file_name = ?1",
                params![file_name],
                row_to_csst_file,
            )
            .optional()?;
        Ok(file)
    }

    /// Register the lab's own name for a polymer or solvent.
    ///
    /// # Errors
    /// Returns `Duplicate` if the name or material is already registered.
    pub fn save_lab_material(
        &self,
        name: &str,
        material: LabMaterialRef,
    ) -> Result<LabMaterial, StorageError> {
        let (pol_id, sol_id) = material.columns();
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO brettmann_lab (pol_id, sol_id, name) VALUES (?1, ?2, ?3)",
            params![pol_id, sol_id, name],
        )?;
        Ok(LabMaterial { id: conn.last_insert_rowid(), name: name.to_owned(), material })
    }

    /// Resolve a lab name to its polymer or solvent.
    ///
    /// # Errors
    /// Returns `DataCorruption` if the stored row references neither or both.
    pub fn get_lab_material(&self, name: &str) -> Result<Option<LabMaterial>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let row = conn
            .query_row(
                "SELECT id, name, pol_id, sol_id FROM brettmann_lab WHERE name = ?1",
                params![name],
                |row| {
                    Ok((
                        row.get::<_, i64>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, Option<i64>>(2)?,
                        row.get::<_, Option<i64>>(3)?,
                    ))
                },
            )
            .optional()?;
        row.map(|(id, name, pol_id, sol_id)| {
            LabMaterial::from_columns(id, name, pol_id, sol_id)
                .map_err(|e| StorageError::corrupt("brettmann_lab row", e))
        })
        .transpose()
    }

    /// Insert a packaging waste statistic.
    ///
    /// # Errors
    /// Returns error if database insert fails.
    pub fn save_packaging_waste(
        &self,
        input: &PackagingWasteInput,
    ) -> Result<PackagingWaste, StorageError> {
        let conn = get_conn(&self.pool)?;
        conn.execute(
            "INSERT INTO containers_and_packaging_waste
               (value, year, type, management_pathway, reference, unit)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                input.value,
                input.year,
                input.waste_type,
                input.management_pathway,
                input.reference,
                input.unit
            ],
        )?;
        Ok(PackagingWaste {
            id: conn.last_insert_rowid(),
            value: input.value,
            year: input.year,
            waste_type: input.waste_type.clone(),
            management_pathway: input.management_pathway.clone(),
            reference: input.reference.clone(),
            unit: input.unit.clone(),
        })
    }
}
