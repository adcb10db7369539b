//! ChemicalStore implementation for PgStorage.

use super::*;

use crate::traits::ChemicalStore;
use async_trait::async_trait;
use pinrex_core::{ChemicalCostInput, ChemicalInput, ChemicalSupplier, make_name_searchable};

#[async_trait]
impl ChemicalStore for PgStorage {
    async fn save_chemical(&self, input: &ChemicalInput) -> Result<Chemical, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO chemicals (smiles, cas) VALUES ($1, $2) RETURNING {CHEMICAL_COLUMNS}"
        ))
        .bind(&input.smiles)
        .bind(&input.cas)
        .fetch_one(&self.pool)
        .await?;
        row_to_chemical(&row)
    }

    async fn get_chemical(&self, id: i64) -> Result<Option<Chemical>, StorageError> {
        let row = sqlx::query(&format!("SELECT {CHEMICAL_COLUMNS} FROM chemicals WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_chemical(&r)).transpose()
    }

    async fn get_chemical_by_smiles(&self, smiles: &str) -> Result<Option<Chemical>, StorageError> {
        let row =
            sqlx::query(&format!("SELECT {CHEMICAL_COLUMNS} FROM chemicals WHERE smiles = $1"))
                .bind(smiles)
                .fetch_optional(&self.pool)
                .await?;
        row.map(|r| row_to_chemical(&r)).transpose()
    }

    async fn find_chemicals_by_name(&self, query: &str) -> Result<Vec<Chemical>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {CHEMICAL_COLUMNS} FROM chemicals
              WHERE id IN (SELECT chemical_id FROM chemical_names WHERE search_name = $1)
              ORDER BY id"
        ))
        .bind(make_name_searchable(query))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_chemical).collect()
    }

    async fn add_supplier(
        &self,
        name: &str,
        site: Option<&str>,
    ) -> Result<ChemicalSupplier, StorageError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO chemical_suppliers (name, site) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(site)
        .fetch_one(&self.pool)
        .await?;
        Ok(ChemicalSupplier { id, name: name.to_owned(), site: site.map(ToOwned::to_owned) })
    }

    async fn add_chemical_cost(
        &self,
        input: &ChemicalCostInput,
    ) -> Result<ChemicalCost, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO chemical_costs
               (chemical_id, supplier_id, cost, cost_unit, amount, amount_unit, usd_cost_per_gram, datetime, note)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COST_COLUMNS}"
        ))
        .bind(input.chemical_id)
        .bind(input.supplier_id)
        .bind(input.cost)
        .bind(&input.cost_unit)
        .bind(input.amount)
        .bind(&input.amount_unit)
        .bind(input.usd_cost_per_gram)
        .bind(input.datetime)
        .bind(&input.note)
        .fetch_one(&self.pool)
        .await?;
        row_to_cost(&row)
    }

    async fn chemical_costs(&self, chemical_id: i64) -> Result<Vec<ChemicalCost>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {COST_COLUMNS} FROM chemical_costs WHERE chemical_id = $1 ORDER BY datetime, id"
        ))
        .bind(chemical_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_cost).collect()
    }

    async fn link_chemical_substructure(
        &self,
        chemical_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError> {
        sqlx::query("INSERT INTO chemical_substructures (smarts_id, chemical_id) VALUES ($1, $2)")
            .bind(smarts_id)
            .bind(chemical_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn chemical_substructures(&self, chemical_id: i64) -> Result<Vec<Smarts>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {SMARTS_COLUMNS} FROM smarts
              WHERE id IN (SELECT smarts_id FROM chemical_substructures WHERE chemical_id = $1)
              ORDER BY id"
        ))
        .bind(chemical_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_smarts).collect()
    }
}
