//! ReactionStore implementation for PgStorage.

use super::*;

use crate::traits::ReactionStore;
use async_trait::async_trait;
use pinrex_core::{
    Polymerization, PolymerizationReaction, PolymerizationReactionInput, Reaction, ReactionInput,
    ReactionPolymerMapping, ReactionProcedure, ReactionStep,
};

fn row_to_procedure(row: &PgRow) -> Result<ReactionProcedure, StorageError> {
    Ok(ReactionProcedure {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
    })
}

#[async_trait]
impl ReactionStore for PgStorage {
    async fn save_reaction(&self, input: &ReactionInput) -> Result<Reaction, StorageError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO reactions (smarts, description, reference) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&input.smarts)
        .bind(&input.description)
        .bind(&input.reference)
        .fetch_one(&self.pool)
        .await?;
        Ok(Reaction {
            id,
            smarts: input.smarts.clone(),
            description: input.description.clone(),
            reference: input.reference.clone(),
        })
    }

    async fn save_reaction_procedure(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> Result<ReactionProcedure, StorageError> {
        let row = sqlx::query(
            "INSERT INTO reaction_procedures (name, description) VALUES ($1, $2)
             RETURNING id, name, description",
        )
        .bind(name)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;
        row_to_procedure(&row)
    }

    async fn get_reaction_procedure(
        &self,
        name: &str,
    ) -> Result<Option<ReactionProcedure>, StorageError> {
        let row =
            sqlx::query("SELECT id, name, description FROM reaction_procedures WHERE name = $1")
                .bind(name)
                .fetch_optional(&self.pool)
                .await?;
        row.map(|r| row_to_procedure(&r)).transpose()
    }

    async fn add_reaction_step(&self, step: ReactionStep) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO reaction_steps (reaction_id, reaction_procedure_id, step) VALUES ($1, $2, $3)",
        )
        .bind(step.reaction_id)
        .bind(step.reaction_procedure_id)
        .bind(step.step)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn procedure_steps(&self, procedure_id: i64) -> Result<Vec<ReactionStep>, StorageError> {
        let rows = sqlx::query(
            "SELECT reaction_id, reaction_procedure_id, step FROM reaction_steps
              WHERE reaction_procedure_id = $1 ORDER BY step, reaction_id",
        )
        .bind(procedure_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter()
            .map(|row| {
                Ok(ReactionStep {
                    reaction_id: row.try_get("reaction_id")?,
                    reaction_procedure_id: row.try_get("reaction_procedure_id")?,
                    step: row.try_get("step")?,
                })
            })
            .collect()
    }

    async fn add_starting_substructure(
        &self,
        procedure_id: i64,
        smarts_id: i64,
    ) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO reaction_procedure_starting_substructure (reaction_procedure_id, smarts_id)
             VALUES ($1, $2)",
        )
        .bind(procedure_id)
        .bind(smarts_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn add_reaction_polymer_mapping(
        &self,
        mapping: ReactionPolymerMapping,
    ) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO reaction_polymer_mappings (reaction_procedure_id, chemical_id, pol_id)
             VALUES ($1, $2, $3)",
        )
        .bind(mapping.reaction_procedure_id)
        .bind(mapping.chemical_id)
        .bind(mapping.pol_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save_polymerization_reaction(
        &self,
        input: &PolymerizationReactionInput,
    ) -> Result<PolymerizationReaction, StorageError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO polymerization_reactions (name, smarts, description, reference)
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&input.name)
        .bind(&input.smarts)
        .bind(&input.description)
        .bind(&input.reference)
        .fetch_one(&self.pool)
        .await?;
        Ok(PolymerizationReaction {
            id,
            name: input.name.clone(),
            smarts: input.smarts.clone(),
            description: input.description.clone(),
            reference: input.reference.clone(),
        })
    }

    async fn add_polymerization(&self, polymerization: Polymerization) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO polymerizations (polymerization_reaction_id, monomer_id, pol_id)
             VALUES ($1, $2, $3)",
        )
        .bind(polymerization.polymerization_reaction_id)
        .bind(polymerization.monomer_id)
        .bind(polymerization.pol_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn polymerizations_for_polymer(
        &self,
        pol_id: i64,
    ) -> Result<Vec<Polymerization>, StorageError> {
        let rows = sqlx::query(
            "SELECT polymerization_reaction_id, monomer_id, pol_id FROM polymerizations
              WHERE pol_id = $1 ORDER BY polymerization_reaction_id, monomer_id",
        )
        .bind(pol_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter()
            .map(|row| {
                Ok(Polymerization {
                    polymerization_reaction_id: row.try_get("polymerization_reaction_id")?,
                    monomer_id: row.try_get("monomer_id")?,
                    pol_id: row.try_get("pol_id")?,
                })
            })
            .collect()
    }
}
