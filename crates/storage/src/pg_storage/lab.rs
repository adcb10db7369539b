//! LabStore implementation for PgStorage.

use super::*;

use crate::traits::LabStore;
use async_trait::async_trait;
use pinrex_core::{
    CsstFileInput, LabMaterial, LabMaterialRef, PackagingWaste, PackagingWasteInput,
};

#[async_trait]
impl LabStore for PgStorage {
    async fn save_csst_file(&self, input: &CsstFileInput) -> Result<CsstFile, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO csst_files
               (file_name, original_name, polymers, solvents, concentrations, date_added, stir_rate,
                start_of_experiment, version, project)
             VALUES ($1, $2, $3, $4, $5, NOW(), $6, $7, $8, $9)
             RETURNING {CSST_FILE_COLUMNS}"
        ))
        .bind(&input.file_name)
        .bind(&input.original_name)
        .bind(serde_json::to_value(&input.polymers)?)
        .bind(serde_json::to_value(&input.solvents)?)
        .bind(serde_json::to_value(&input.concentrations)?)
        .bind(input.stir_rate)
        .bind(input.start_of_experiment)
        .bind(&input.version)
        .bind(&input.project)
        .fetch_one(&self.pool)
        .await?;
        let file = row_to_csst_file(&row)?;
        tracing::debug!(id = file.id, file_name = %file.file_name, "CSST file saved");
        Ok(file)
    }

    async fn get_csst_file(&self, file_name: &str) -> Result<Option<CsstFile>, StorageError> {
        let row =
            sqlx::query(&format!("SELECT {CSST_FILE_COLUMNS} FROM csst_files WHERE file_name = $1"))
                .bind(file_name)
                .fetch_optional(&self.pool)
                .await?;
        row.map(|r| row_to_csst_file(&r)).transpose()
    }

    async fn save_lab_material(
        &self,
        name: &str,
        material: LabMaterialRef,
    ) -> Result<LabMaterial, StorageError> {
        let (pol_id, sol_id) = material.columns();
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO brettmann_lab (pol_id, sol_id, name) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(pol_id)
        .bind(sol_id)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(LabMaterial { id, name: name.to_owned(), material })
    }

    async fn get_lab_material(&self, name: &str) -> Result<Option<LabMaterial>, StorageError> {
        let row = sqlx::query("SELECT id, name, pol_id, sol_id FROM brettmann_lab WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| {
            LabMaterial::from_columns(
                r.try_get("id")?,
                r.try_get("name")?,
                r.try_get("pol_id")?,
                r.try_get("sol_id")?,
            )
            .map_err(|e| StorageError::corrupt("brettmann_lab row", e))
        })
        .transpose()
    }

    async fn save_packaging_waste(
        &self,
        input: &PackagingWasteInput,
    ) -> Result<PackagingWaste, StorageError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO containers_and_packaging_waste
               (value, year, type, management_pathway, reference, unit)
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
        )
        .bind(input.value)
        .bind(input.year)
        .bind(&input.waste_type)
        .bind(&input.management_pathway)
        .bind(&input.reference)
        .bind(&input.unit)
        .fetch_one(&self.pool)
        .await?;
        Ok(PackagingWaste {
            id,
            value: input.value,
            year: input.year,
            waste_type: input.waste_type.clone(),
            management_pathway: input.management_pathway.clone(),
            reference: input.reference.clone(),
            unit: input.unit.clone(),
        })
    }
}
