//! SolventStore implementation for PgStorage.

use super::*;

use crate::traits::SolventStore;
use async_trait::async_trait;
use pinrex_core::{SolubilityDataInput, SolventInput, make_name_searchable};

#[async_trait]
impl SolventStore for PgStorage {
    async fn save_solvent(&self, input: &SolventInput) -> Result<Solvent, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO solvents (smiles, fingerprint, map4_fingerprint) VALUES ($1, $2, $3)
             RETURNING {SOLVENT_COLUMNS}"
        ))
        .bind(&input.smiles)
        .bind(&input.fingerprint)
        .bind(&input.map4_fingerprint)
        .fetch_one(&self.pool)
        .await?;
        row_to_solvent(&row)
    }

    async fn get_solvent(&self, id: i64) -> Result<Option<Solvent>, StorageError> {
        let row = sqlx::query(&format!("SELECT {SOLVENT_COLUMNS} FROM solvents WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_solvent(&r)).transpose()
    }

    async fn get_solvent_by_smiles(&self, smiles: &str) -> Result<Option<Solvent>, StorageError> {
        let row = sqlx::query(&format!("SELECT {SOLVENT_COLUMNS} FROM solvents WHERE smiles = $1"))
            .bind(smiles)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_solvent(&r)).transpose()
    }

    async fn find_solvents_by_name(&self, query: &str) -> Result<Vec<Solvent>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SOLVENT_COLUMNS} FROM solvents
              WHERE id IN (SELECT sol_id FROM solvent_names WHERE search_name = $1)
              ORDER BY id"
        ))
        .bind(make_name_searchable(query))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_solvent).collect()
    }

    async fn add_solubility_data(
        &self,
        input: &SolubilityDataInput,
    ) -> Result<SolubilityData, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO solubility_data
               (reference, date_added, pol_id, sol_id, solubility, date_of_test, temp_min, temp_max,
                pdi_min, pdi_max, pol_mw_min, pol_mw_max, pol_mw_type, conc_mg_per_ml, csst_file_id)
             VALUES ($1, NOW(), $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {SOLUBILITY_COLUMNS}"
        ))
        .bind(&input.reference)
        .bind(input.pol_id)
        .bind(input.sol_id)
        .bind(&input.solubility)
        .bind(input.date_of_test)
        .bind(input.temp_min)
        .bind(input.temp_max)
        .bind(input.pdi_min)
        .bind(input.pdi_max)
        .bind(input.pol_mw_min)
        .bind(input.pol_mw_max)
        .bind(&input.pol_mw_type)
        .bind(input.conc_mg_per_ml)
        .bind(input.csst_file_id)
        .fetch_one(&self.pool)
        .await?;
        row_to_solubility(&row)
    }

    async fn solubility_for_polymer(
        &self,
        pol_id: i64,
    ) -> Result<Vec<SolubilityData>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SOLUBILITY_COLUMNS} FROM solubility_data WHERE pol_id = $1 ORDER BY id"
        ))
        .bind(pol_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_solubility).collect()
    }
}
