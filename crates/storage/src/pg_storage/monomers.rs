//! MonomerStore implementation for PgStorage.

use super::*;

use crate::traits::MonomerStore;
use async_trait::async_trait;
use pinrex_core::{MonomerInput, SmartsInput};

#[async_trait]
impl MonomerStore for PgStorage {
    async fn save_monomer(&self, input: &MonomerInput) -> Result<Monomer, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO monomers (smiles, reference_id, reference) VALUES ($1, $2, $3)
             RETURNING {MONOMER_COLUMNS}"
        ))
        .bind(&input.smiles)
        .bind(&input.reference_id)
        .bind(&input.reference)
        .fetch_one(&self.pool)
        .await?;
        row_to_monomer(&row)
    }

    async fn get_monomer(&self, id: i64) -> Result<Option<Monomer>, StorageError> {
        let row = sqlx::query(&format!("SELECT {MONOMER_COLUMNS} FROM monomers WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_monomer(&r)).transpose()
    }

    async fn get_monomer_by_smiles(&self, smiles: &str) -> Result<Option<Monomer>, StorageError> {
        let row = sqlx::query(&format!("SELECT {MONOMER_COLUMNS} FROM monomers WHERE smiles = $1"))
            .bind(smiles)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_monomer(&r)).transpose()
    }

    async fn save_smarts(&self, input: &SmartsInput) -> Result<Smarts, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO smarts (name, smarts, description, reference) VALUES ($1, $2, $3, $4)
             RETURNING {SMARTS_COLUMNS}"
        ))
        .bind(&input.name)
        .bind(&input.smarts)
        .bind(&input.description)
        .bind(&input.reference)
        .fetch_one(&self.pool)
        .await?;
        row_to_smarts(&row)
    }

    async fn get_smarts(&self, id: i64) -> Result<Option<Smarts>, StorageError> {
        let row = sqlx::query(&format!("SELECT {SMARTS_COLUMNS} FROM smarts WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_smarts(&r)).transpose()
    }

    async fn link_monomer_substructure(
        &self,
        monomer_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO monomer_substructures (smarts_id, monomer_id) VALUES ($1, $2)")
            .bind(smarts_id)
            .bind(monomer_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn monomer_substructures(&self, monomer_id: i64) -> Result<Vec<Smarts>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SMARTS_COLUMNS} FROM smarts
              WHERE id IN (SELECT smarts_id FROM monomer_substructures WHERE monomer_id = $1)
              ORDER BY id"
        ))
        .bind(monomer_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_smarts).collect()
    }
}
