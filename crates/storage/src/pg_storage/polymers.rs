//! PolymerStore implementation for PgStorage.

use super::*;

use crate::traits::PolymerStore;
use async_trait::async_trait;
use pinrex_core::{
    PolymerApplication, PolymerApplicationInput, PolymerInput, PolymerPropertyInput, Property,
    PropertyInput, make_name_searchable,
};

fn row_to_application(row: &PgRow) -> Result<PolymerApplication, StorageError> {
    Ok(PolymerApplication {
        id: row.try_get("id")?,
        pol_id: row.try_get("pol_id")?,
        application: row.try_get("application")?,
        category: row.try_get("category")?,
        note: row.try_get("note")?,
        reference: row.try_get("reference")?,
    })
}

#[async_trait]
impl PolymerStore for PgStorage {
    async fn save_polymer(&self, input: &PolymerInput) -> Result<Polymer, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO polymers (pid, rid, smiles, canonical_smiles, fingerprint, category)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {POLYMER_COLUMNS}"
        ))
        .bind(&input.pid)
        .bind(&input.rid)
        .bind(&input.smiles)
        .bind(&input.canonical_smiles)
        .bind(&input.fingerprint)
        .bind(&input.category)
        .fetch_one(&self.pool)
        .await?;
        let polymer = row_to_polymer(&row)?;
        tracing::debug!(id = polymer.id, rid = ?polymer.rid, "polymer saved");
        Ok(polymer)
    }

    async fn get_polymer(&self, id: i64) -> Result<Option<Polymer>, StorageError> {
        let row = sqlx::query(&format!("SELECT {POLYMER_COLUMNS} FROM polymers WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_polymer(&r)).transpose()
    }

    async fn get_polymer_by_rid(&self, rid: &str) -> Result<Option<Polymer>, StorageError> {
        let row = sqlx::query(&format!("SELECT {POLYMER_COLUMNS} FROM polymers WHERE rid = $1"))
            .bind(rid)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_polymer(&r)).transpose()
    }

    async fn find_polymers_by_name(&self, query: &str) -> Result<Vec<Polymer>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {POLYMER_COLUMNS} FROM polymers
              WHERE id IN (SELECT pol_id FROM polymer_names WHERE search_name = $1)
              ORDER BY id"
        ))
        .bind(make_name_searchable(query))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_polymer).collect()
    }

    async fn save_property(&self, input: &PropertyInput) -> Result<Property, StorageError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO properties (name, short_name, unit, plot_symbol) VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.short_name)
        .bind(&input.unit)
        .bind(&input.plot_symbol)
        .fetch_one(&self.pool)
        .await?;
        Ok(Property {
            id,
            name: input.name.clone(),
            short_name: input.short_name.clone(),
            unit: input.unit.clone(),
            plot_symbol: input.plot_symbol.clone(),
        })
    }

    async fn add_polymer_property(
        &self,
        input: &PolymerPropertyInput,
    ) -> Result<PolymerProperty, StorageError> {
        let row = sqlx::query(&format!(
            "INSERT INTO polymer_properties
               (pol_id, property_id, value, method, reference, note, error_value, error_type, conditions)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {POLYMER_PROPERTY_COLUMNS}"
        ))
        .bind(input.pol_id)
        .bind(input.property_id)
        .bind(input.value)
        .bind(&input.method)
        .bind(&input.reference)
        .bind(&input.note)
        .bind(input.error_value)
        .bind(input.error_type.map(|t| t.as_str()))
        .bind(&input.conditions)
        .fetch_one(&self.pool)
        .await?;
        row_to_polymer_property(&row)
    }

    async fn polymer_properties(&self, pol_id: i64) -> Result<Vec<PolymerProperty>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {POLYMER_PROPERTY_COLUMNS} FROM polymer_properties WHERE pol_id = $1 ORDER BY id"
        ))
        .bind(pol_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_polymer_property).collect()
    }

    async fn add_polymer_application(
        &self,
        input: &PolymerApplicationInput,
    ) -> Result<PolymerApplication, StorageError> {
        let row = sqlx::query(
            "INSERT INTO polymer_applications (pol_id, application, category, note, reference)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, pol_id, application, category, note, reference",
        )
        .bind(input.pol_id)
        .bind(&input.application)
        .bind(&input.category)
        .bind(&input.note)
        .bind(&input.reference)
        .fetch_one(&self.pool)
        .await?;
        row_to_application(&row)
    }

    async fn polymer_applications(
        &self,
        pol_id: i64,
    ) -> Result<Vec<PolymerApplication>, StorageError> {
        let rows = sqlx::query(
            "SELECT id, pol_id, application, category, note, reference
               FROM polymer_applications WHERE pol_id = $1 ORDER BY id",
        )
        .bind(pol_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_application).collect()
    }
}
